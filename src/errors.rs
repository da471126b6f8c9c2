//! Unified application error type.
//! Both stages, the config layer and the CLI return AppError so that a
//! failing run always ends with one readable message and a non-zero exit.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Row / field decoding
    // ---------------------------
    #[error("Line {line}: expected {expected} comma-separated fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: malformed timestamp '{value}'")]
    MalformedTimestamp { line: u64, value: String },

    #[error("Line {line}: not a valid calendar date/time: '{value}'")]
    InvalidCalendarValue { line: u64, value: String },

    #[error("Line {line}: invalid duration '{value}' (expected a whole number of minutes)")]
    DurationParse { line: u64, value: String },

    // ---------------------------
    // Files
    // ---------------------------
    #[error("Cannot access '{}': {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(#[source] io::Error),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(#[source] io::Error),
}

impl AppError {
    /// Wrap an open/create failure together with the path it concerns.
    pub fn resource(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Resource {
            path: path.into(),
            source,
        }
    }

    /// Input line the error refers to, when it comes from a data row.
    pub fn line(&self) -> Option<u64> {
        match self {
            AppError::MalformedRow { line, .. }
            | AppError::MalformedTimestamp { line, .. }
            | AppError::InvalidCalendarValue { line, .. }
            | AppError::DurationParse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
