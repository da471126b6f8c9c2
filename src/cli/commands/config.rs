use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

pub fn handle(cli: &Cli, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = &cli.command
    {
        if *init {
            Config::init_file(path, *force)?;
            success(format!("Config file written: {}", path.display()));
        }

        if *print_config {
            print!("{}", cfg.to_yaml()?);
        }

        if !*init && !*print_config {
            let state = if path.exists() { "" } else { " (not found, using defaults)" };
            info(format!("Config file: {}{}", path.display(), state));
        }
    }
    Ok(())
}
