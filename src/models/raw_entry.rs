use crate::errors::{AppError, AppResult};
use crate::models::normalized_entry::NormalizedLogEntry;
use crate::utils::date::join_date;

/// Number of comma-separated fields in every log row, raw or normalized.
pub const FIELD_COUNT: usize = 4;

/// A raw export timestamp: `<day> M<month> <year> <HH:MM>`.
///
/// Every component is kept as text; nothing here is checked against the
/// calendar. The first character of the month token (the `M`) is dropped
/// without looking at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTimestamp {
    pub day: String,
    pub month: String,
    pub year: String,
    pub time: String,
}

impl CustomTimestamp {
    pub fn parse(raw: &str, line: u64) -> AppResult<Self> {
        let malformed = || AppError::MalformedTimestamp {
            line,
            value: raw.to_string(),
        };

        let tokens: Vec<&str> = raw.split(' ').collect();
        let [day, month_token, year, time] = tokens.as_slice() else {
            return Err(malformed());
        };

        // an empty token stays empty
        let mut month = month_token.chars();
        month.next();

        Ok(Self {
            day: day.to_string(),
            month: month.as_str().to_string(),
            year: year.to_string(),
            time: time.to_string(),
        })
    }

    /// `year-month-day`
    pub fn date(&self, pad: bool) -> String {
        join_date(&self.year, &self.month, &self.day, pad)
    }

    /// `year-month-day HH:MM`
    pub fn normalized(&self, pad: bool) -> String {
        format!("{} {}", self.date(pad), self.time)
    }
}

/// One row of the raw time-tracking export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLogEntry {
    pub activity: String,
    pub start: CustomTimestamp,
    pub end: CustomTimestamp,
    /// Passed through untouched; the clean stage never interprets it.
    pub minutes: String,
}

impl RawLogEntry {
    pub fn from_fields(fields: &[&str], line: u64) -> AppResult<Self> {
        let [activity, start, end, minutes] = fields else {
            return Err(AppError::MalformedRow {
                line,
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        };

        Ok(Self {
            activity: activity.to_string(),
            start: CustomTimestamp::parse(start, line)?,
            end: CustomTimestamp::parse(end, line)?,
            minutes: minutes.to_string(),
        })
    }

    pub fn normalize(&self, pad_dates: bool) -> NormalizedLogEntry {
        NormalizedLogEntry {
            activity: self.activity.clone(),
            start: self.start.normalized(pad_dates),
            end: self.end.normalized(pad_dates),
            minutes: self.minutes.clone(),
        }
    }
}
