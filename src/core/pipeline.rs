use crate::config::Config;
use crate::core::expand::MinuteExpander;
use crate::core::normalize::{DateNormalizer, NormalizeOptions};
use crate::core::StageReport;
use crate::errors::AppResult;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub clean: StageReport,
    pub minutes: StageReport,
}

/// raw log → clean stage → normalized log → minutize stage → minute log.
/// The minutize stage only starts once the clean stage succeeded.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub raw: PathBuf,
    pub clean: PathBuf,
    pub minutes: PathBuf,
    pub options: NormalizeOptions,
}

impl Pipeline {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            raw: cfg.raw_path(),
            clean: cfg.clean_path(),
            minutes: cfg.minutes_path(),
            options: NormalizeOptions {
                skip_header: cfg.skip_raw_header,
                pad_dates: cfg.pad_dates,
            },
        }
    }

    pub fn run(&self) -> AppResult<PipelineReport> {
        let clean = DateNormalizer::new(self.options).run_files(&self.raw, &self.clean)?;
        let minutes = MinuteExpander::new().run_files(&self.clean, &self.minutes)?;

        info!(
            raw_rows = clean.rows_read,
            minute_rows = minutes.rows_written,
            "pipeline completed"
        );
        Ok(PipelineReport { clean, minutes })
    }
}
