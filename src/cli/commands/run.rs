use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Pipeline;
use crate::errors::AppResult;
use crate::ui::messages::stage_done;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run {
        raw,
        clean,
        minutes,
        skip_header,
        pad_dates,
    } = cmd
    {
        let mut pipeline = Pipeline::from_config(cfg);
        if let Some(p) = raw {
            pipeline.raw = expand_tilde(p);
        }
        if let Some(p) = clean {
            pipeline.clean = expand_tilde(p);
        }
        if let Some(p) = minutes {
            pipeline.minutes = expand_tilde(p);
        }
        pipeline.options.skip_header |= *skip_header;
        pipeline.options.pad_dates |= *pad_dates;

        let report = pipeline.run()?;
        stage_done("clean", &report.clean, &pipeline.clean);
        stage_done("minutize", &report.minutes, &pipeline.minutes);
    }
    Ok(())
}
