pub mod date;
pub mod logging;
pub mod path;

pub use date::{MINUTE_FORMAT, format_minute};
