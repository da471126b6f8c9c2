use crate::core::StageReport;
use crate::errors::AppResult;
use crate::logfile::{LogLines, create_output, log_writer, open_input};
use crate::models::{NORMALIZED_HEADER, NormalizedLogEntry, RawLogEntry};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Consume the first input line without parsing it.
    pub skip_header: bool,
    /// Zero-pad single-digit months and days.
    pub pad_dates: bool,
}

/// Clean stage: rewrites `<day> M<month> <year> <HH:MM>` timestamps of the
/// raw export as `year-month-day HH:MM`, one output row per input row.
///
/// Activity and minutes are copied verbatim. By default every input line is
/// treated as data, so a raw file that starts with a header fails on line 1
/// unless `skip_header` is set.
#[derive(Debug, Clone, Default)]
pub struct DateNormalizer {
    options: NormalizeOptions,
}

impl DateNormalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    pub fn normalize_line(&self, fields: &[&str], line: u64) -> AppResult<NormalizedLogEntry> {
        let raw = RawLogEntry::from_fields(fields, line)?;
        Ok(raw.normalize(self.options.pad_dates))
    }

    pub fn run<R: Read, W: Write>(&self, input: R, output: W) -> AppResult<StageReport> {
        let mut lines = LogLines::new(input);
        let mut writer = log_writer(output);
        let mut report = StageReport::default();

        writer.write_record(NORMALIZED_HEADER)?;

        if self.options.skip_header
            && let Some(header) = lines.skip_header()?
        {
            debug!(line = header.number, "raw header skipped");
        }

        for line in lines {
            let line = line?;
            report.rows_read += 1;

            let entry = self.normalize_line(&line.fields(), line.number)?;
            trace!(line = line.number, start = %entry.start, end = %entry.end, "normalized");

            writer.serialize(&entry)?;
            report.rows_written += 1;
        }

        writer.flush()?;
        Ok(report)
    }

    #[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
    pub fn run_files(&self, input: &Path, output: &Path) -> AppResult<StageReport> {
        let source = open_input(input)?;
        let sink = create_output(output)?;
        let report = self.run(source, sink)?;
        info!(rows = report.rows_written, "clean stage done");
        Ok(report)
    }
}
