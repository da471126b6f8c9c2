pub mod minute_record;
pub mod normalized_entry;
pub mod raw_entry;

pub use minute_record::{MINUTE_HEADER, MinuteRecord};
pub use normalized_entry::{NORMALIZED_HEADER, NormalizedLogEntry};
pub use raw_entry::{CustomTimestamp, FIELD_COUNT, RawLogEntry};
