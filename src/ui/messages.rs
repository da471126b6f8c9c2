use crate::core::StageReport;
use std::fmt;
use std::path::Path;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

/// One line per finished stage: `<label>: <n> rows → <path>`.
pub fn stage_done(label: &str, report: &StageReport, path: &Path) {
    success(format!(
        "{label}: {} rows read, {} rows written → {}",
        report.rows_read,
        report.rows_written,
        path.display()
    ));
}
