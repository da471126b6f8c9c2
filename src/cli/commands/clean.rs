use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{DateNormalizer, NormalizeOptions};
use crate::errors::AppResult;
use crate::ui::messages::stage_done;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clean {
        input,
        output,
        skip_header,
        pad_dates,
    } = cmd
    {
        let input = input.as_deref().map(expand_tilde).unwrap_or_else(|| cfg.raw_path());
        let output = output
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.clean_path());

        let options = NormalizeOptions {
            skip_header: *skip_header || cfg.skip_raw_header,
            pad_dates: *pad_dates || cfg.pad_dates,
        };

        let report = DateNormalizer::new(options).run_files(&input, &output)?;
        stage_done("clean", &report, &output);
    }
    Ok(())
}
