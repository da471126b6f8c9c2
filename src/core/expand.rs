use crate::core::StageReport;
use crate::errors::{AppError, AppResult};
use crate::logfile::{LogLines, create_output, log_writer, open_input};
use crate::models::{MINUTE_HEADER, MinuteRecord, NormalizedLogEntry};
use crate::utils::date::in_year_range;
use chrono::{NaiveDateTime, TimeDelta};
use std::io::{Read, Write};
use std::iter::FusedIterator;
use std::path::Path;
use tracing::{debug, info, trace};

/// The minutes of one interval, identified by its last minute and length.
///
/// Iterating yields `end`, `end - 1min`, ... `end - (count - 1)min`. The
/// minute `end - count` belongs to the previous interval and is never
/// produced, so back-to-back intervals do not count their shared boundary
/// twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteSpan {
    end: NaiveDateTime,
    count: u32,
}

impl MinuteSpan {
    /// `None` if the end or the earliest minute falls outside years 1..=9999.
    pub fn new(end: NaiveDateTime, count: u32) -> Option<Self> {
        if !in_year_range(&end) {
            return None;
        }
        if count > 0 {
            let earliest = end.checked_sub_signed(TimeDelta::minutes(i64::from(count) - 1))?;
            if !in_year_range(&earliest) {
                return None;
            }
        }
        Some(Self { end, count })
    }

    /// Last minute produced, i.e. the earliest timestamp of the span.
    pub fn earliest(&self) -> Option<NaiveDateTime> {
        (self.count > 0).then(|| self.end - TimeDelta::minutes(i64::from(self.count) - 1))
    }

    /// A fresh descending walk; can be called any number of times.
    pub fn iter(&self) -> MinuteSteps {
        MinuteSteps {
            next: self.end,
            remaining: self.count,
        }
    }
}

impl IntoIterator for MinuteSpan {
    type Item = NaiveDateTime;
    type IntoIter = MinuteSteps;

    fn into_iter(self) -> MinuteSteps {
        self.iter()
    }
}

impl IntoIterator for &MinuteSpan {
    type Item = NaiveDateTime;
    type IntoIter = MinuteSteps;

    fn into_iter(self) -> MinuteSteps {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct MinuteSteps {
    next: NaiveDateTime,
    remaining: u32,
}

impl Iterator for MinuteSteps {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        if self.remaining == 0 {
            return None;
        }

        let current = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            // in range: MinuteSpan::new checked the earliest minute
            self.next = current - TimeDelta::minutes(1);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for MinuteSteps {}

impl FusedIterator for MinuteSteps {}

/// Minutize stage: one `date_time,activity` row per elapsed minute of every
/// normalized interval, newest minute first within each interval.
///
/// The first input line is a header and is always skipped. A row is fully
/// validated before any of its minutes is written.
#[derive(Debug, Clone, Default)]
pub struct MinuteExpander;

impl MinuteExpander {
    pub fn new() -> Self {
        Self
    }

    /// Duration is checked before the end timestamp.
    pub fn span_for(entry: &NormalizedLogEntry, line: u64) -> AppResult<MinuteSpan> {
        let count = entry.duration(line)?;
        let end = entry.end_time(line)?;
        MinuteSpan::new(end, count).ok_or_else(|| AppError::InvalidCalendarValue {
            line,
            value: entry.end.clone(),
        })
    }

    pub fn expand_entry(
        entry: &NormalizedLogEntry,
        line: u64,
    ) -> AppResult<impl Iterator<Item = MinuteRecord>> {
        let span = Self::span_for(entry, line)?;
        Ok(span.iter().map(move |date_time| MinuteRecord {
            date_time,
            activity: entry.activity.clone(),
        }))
    }

    pub fn expand_line(&self, fields: &[&str], line: u64) -> AppResult<Vec<MinuteRecord>> {
        let entry = NormalizedLogEntry::from_fields(fields, line)?;
        Ok(Self::expand_entry(&entry, line)?.collect())
    }

    pub fn run<R: Read, W: Write>(&self, input: R, output: W) -> AppResult<StageReport> {
        let mut lines = LogLines::new(input);
        let mut writer = log_writer(output);
        let mut report = StageReport::default();

        writer.write_record(MINUTE_HEADER)?;

        if let Some(header) = lines.skip_header()? {
            debug!(line = header.number, "normalized header skipped");
        }

        for line in lines {
            let line = line?;
            report.rows_read += 1;

            let entry = NormalizedLogEntry::from_fields(&line.fields(), line.number)?;
            let minutes = Self::expand_entry(&entry, line.number)?;
            trace!(
                line = line.number,
                activity = %entry.activity,
                minutes = minutes.size_hint().0,
                "expanding"
            );

            for minute in minutes {
                writer.serialize(&minute)?;
                report.rows_written += 1;
            }
        }

        writer.flush()?;
        Ok(report)
    }

    #[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
    pub fn run_files(&self, input: &Path, output: &Path) -> AppResult<StageReport> {
        let source = open_input(input)?;
        let sink = create_output(output)?;
        let report = self.run(source, sink)?;
        info!(
            intervals = report.rows_read,
            minutes = report.rows_written,
            "minutize stage done"
        );
        Ok(report)
    }
}
