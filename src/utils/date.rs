use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use std::ops::RangeInclusive;

/// Timestamp layout of the minute log.
pub const MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Years that fit the four-digit `%Y` of `MINUTE_FORMAT`.
pub const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

pub fn in_year_range(ts: &NaiveDateTime) -> bool {
    YEAR_RANGE.contains(&ts.year())
}

/// Join date components as `year-month-day`.
///
/// Components are copied as they are; with `pad` a purely numeric month or
/// day shorter than two characters gets a leading zero.
pub fn join_date(year: &str, month: &str, day: &str, pad: bool) -> String {
    if pad {
        format!("{}-{}-{}", year, pad2(month), pad2(day))
    } else {
        format!("{}-{}-{}", year, month, day)
    }
}

fn pad2(component: &str) -> String {
    if component.len() == 1 && component.chars().all(|c| c.is_ascii_digit()) {
        format!("0{}", component)
    } else {
        component.to_string()
    }
}

/// Build a calendar date-time, `None` if any component is out of range
/// (years outside `YEAR_RANGE` included).
pub fn calendar_datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Option<NaiveDateTime> {
    if !YEAR_RANGE.contains(&year) {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(date.and_time(time))
}

pub fn format_minute(ts: &NaiveDateTime) -> String {
    ts.format(MINUTE_FORMAT).to_string()
}
