//! Line-oriented plumbing shared by both stages.
//!
//! Logs are plain comma-separated text: no quoting on input, none on output.
//! Input is consumed one physical line at a time, so a blank line is still a
//! line (and fails as a one-field row). Files are opened once per stage and
//! closed when the reader/writer drops.

use crate::errors::{AppError, AppResult};
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

pub type LogWriter<W> = csv::Writer<W>;

/// One physical input line, terminator removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// 1-based
    pub number: u64,
    pub text: String,
}

impl LogLine {
    /// Split on `,` after stripping whitespace at both ends of the line
    /// (but not around inner separators). A blank line is one empty field.
    pub fn fields(&self) -> Vec<&str> {
        self.text.trim().split(',').collect()
    }
}

/// Iterator over the physical lines of a log, blank ones included.
pub struct LogLines<R> {
    reader: BufReader<R>,
    number: u64,
}

impl<R: Read> LogLines<R> {
    pub fn new(input: R) -> Self {
        Self {
            reader: BufReader::new(input),
            number: 0,
        }
    }

    /// Consume exactly one line without looking at it.
    pub fn skip_header(&mut self) -> AppResult<Option<LogLine>> {
        self.next().transpose()
    }
}

impl<R: Read> Iterator for LogLines<R> {
    type Item = AppResult<LogLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut text = String::new();
        match self.reader.read_line(&mut text) {
            Ok(0) => None,
            Ok(_) => {
                self.number += 1;
                let len = text.trim_end_matches(['\n', '\r']).len();
                text.truncate(len);
                Some(Ok(LogLine {
                    number: self.number,
                    text,
                }))
            }
            Err(e) => Some(Err(AppError::from(e))),
        }
    }
}

/// Writer that emits fields verbatim, never quoted.
pub fn log_writer<W: Write>(output: W) -> LogWriter<W> {
    WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(output)
}

pub fn open_input(path: &Path) -> AppResult<File> {
    File::open(path).map_err(|e| AppError::resource(path, e))
}

/// Create (or truncate) an output file.
pub fn create_output(path: &Path) -> AppResult<File> {
    File::create(path).map_err(|e| AppError::resource(path, e))
}
