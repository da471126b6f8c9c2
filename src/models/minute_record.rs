use crate::utils::date::MINUTE_FORMAT;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Header of the minute log.
pub const MINUTE_HEADER: [&str; 2] = ["date_time", "activity"];

/// One elapsed minute of an activity.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MinuteRecord {
    #[serde(serialize_with = "serialize_minute")]
    pub date_time: NaiveDateTime,
    pub activity: String,
}

fn serialize_minute<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&ts.format(MINUTE_FORMAT))
}
