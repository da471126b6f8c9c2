use crate::errors::{AppError, AppResult};
use crate::models::raw_entry::FIELD_COUNT;
use crate::utils::date::calendar_datetime;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Header of the normalized log, written whatever the raw input looked like.
pub const NORMALIZED_HEADER: [&str; FIELD_COUNT] = ["activity", "start", "end", "minutes"];

/// One row of the normalized log.
///
/// `start` and `end` are `year-month-day HH:MM` exactly as the clean stage
/// assembled them (month and day are not necessarily zero-padded).
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLogEntry {
    pub activity: String,
    pub start: String,
    pub end: String,
    pub minutes: String,
}

impl NormalizedLogEntry {
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
            start: start.to_string(),
            end: end.to_string(),
            minutes: minutes.to_string(),
        })
    }

    /// Interval length in minutes.
    pub fn duration(&self, line: u64) -> AppResult<u32> {
        self.minutes
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::DurationParse {
                line,
                value: self.minutes.clone(),
            })
    }

    /// End of the interval as a calendar date-time.
    pub fn end_time(&self, line: u64) -> AppResult<NaiveDateTime> {
        parse_normalized_timestamp(&self.end, line)
    }
}

/// Decode `Y-M-D H:M` (components need not be zero-padded).
///
/// A layout problem is a `MalformedTimestamp`; numbers that do not form a
/// real date or time are an `InvalidCalendarValue`.
pub fn parse_normalized_timestamp(value: &str, line: u64) -> AppResult<NaiveDateTime> {
    let malformed = || AppError::MalformedTimestamp {
        line,
        value: value.to_string(),
    };

    let (date, time) = value.split_once(' ').ok_or_else(malformed)?;

    let date_parts: Vec<&str> = date.split('-').collect();
    let [year, month, day] = date_parts.as_slice() else {
        return Err(malformed());
    };
    let time_parts: Vec<&str> = time.split(':').collect();
    let [hour, minute] = time_parts.as_slice() else {
        return Err(malformed());
    };

    let year: i32 = year.parse().map_err(|_| malformed())?;
    let month: u32 = month.parse().map_err(|_| malformed())?;
    let day: u32 = day.parse().map_err(|_| malformed())?;
    let hour: u32 = hour.parse().map_err(|_| malformed())?;
    let minute: u32 = minute.parse().map_err(|_| malformed())?;

    calendar_datetime(year, month, day, hour, minute).ok_or_else(|| {
        AppError::InvalidCalendarValue {
            line,
            value: value.to_string(),
        }
    })
}
