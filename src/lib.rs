//! minutize library root.
//! Exposes the CLI parser, the high-level run() function, and the two
//! log stages (clean, minutize) for use over any reader/writer pair.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logfile;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Clean { .. } => cli::commands::clean::handle(&cli.command, cfg),
        Commands::Minutize { .. } => cli::commands::minutize::handle(&cli.command, cfg),
        Commands::Run { .. } => cli::commands::run::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg, config_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    utils::logging::enable_logging(cli.verbose);

    let config_path: PathBuf = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);

    // config is loaded once; command-line flags override it in the handlers
    let cfg = match Config::load_from(&config_path) {
        Ok(cfg) => cfg,
        // a broken file must not prevent `config --init --force` from replacing it
        Err(e) if matches!(cli.command, Commands::Config { init: true, .. }) => {
            tracing::warn!(error = %e, "ignoring unreadable configuration");
            Config::default()
        }
        Err(e) => return Err(e),
    };
    tracing::debug!(config = %config_path.display(), ?cfg, "configuration loaded");

    dispatch(&cli, &cfg, &config_path)
}
