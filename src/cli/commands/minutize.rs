use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::MinuteExpander;
use crate::errors::AppResult;
use crate::ui::messages::stage_done;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Minutize { input, output } = cmd {
        let input = input
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.clean_path());
        let output = output
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.minutes_path());

        let report = MinuteExpander::new().run_files(&input, &output)?;
        stage_done("minutize", &report, &output);
    }
    Ok(())
}
