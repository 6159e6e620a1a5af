//! Reading probe logs and reading/writing the summary table.
//!
//! # Formats
//!
//! - **Raw probe log**: whitespace-separated `start_time reply_time [rtt]`
//!   per line, microseconds, `#` starts a comment
//! - **Summary table**: CSV with header
//!   `configured_period,rtt_p90,rtt_std,request_period_cv,reply_period_cv`
//! - **Derived records**: CSV of a log's records with sequence index and periods
//!
//! Unavailable values are written as empty CSV fields.

mod log;
mod table;

pub use log::{parse_log, parse_log_reader};
pub use table::{
    parse_summary, read_summary_csv, write_derived, write_derived_csv, write_summary,
    write_summary_csv, DERIVED_HEADER, SUMMARY_HEADER,
};

use std::fmt;
use std::path::PathBuf;

use rttometer_core::PeriodOverflow;

/// Errors that can occur while reading logs or summary tables.
///
/// Every variant means the input is malformed: the file cannot be read or a
/// data line violates the token-count/type contract.
#[derive(Debug)]
pub enum DataError {
    /// The file could not be opened or read.
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A data line has fewer tokens than required.
    MissingField {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Number of tokens required.
        expected: usize,
        /// Number of tokens found.
        found: usize,
    },

    /// A token is not a valid integer timestamp.
    InvalidValue {
        /// Line number where the invalid value was found (1-indexed).
        line: usize,
        /// The invalid token.
        value: String,
    },

    /// A summary table line does not match the table format.
    MalformedTable {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// Consecutive timestamps are too far apart for their period to fit in
    /// an `i64`.
    PeriodOverflow(PeriodOverflow),
}

impl DataError {
    /// Line number of the offending line, if the error is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            DataError::Io { .. } | DataError::PeriodOverflow(_) => None,
            DataError::MissingField { line, .. }
            | DataError::InvalidValue { line, .. }
            | DataError::MalformedTable { line, .. } => Some(*line),
        }
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            DataError::MissingField {
                line,
                expected,
                found,
            } => write!(
                f,
                "malformed input at line {}: expected at least {} fields, got {}",
                line, expected, found
            ),
            DataError::InvalidValue { line, value } => {
                write!(f, "malformed input at line {}: invalid integer '{}'", line, value)
            }
            DataError::MalformedTable { line, message } => {
                write!(f, "malformed summary table at line {}: {}", line, message)
            }
            DataError::PeriodOverflow(e) => write!(f, "malformed input: {}", e),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io { source, .. } => Some(source),
            DataError::PeriodOverflow(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PeriodOverflow> for DataError {
    fn from(e: PeriodOverflow) -> Self {
        DataError::PeriodOverflow(e)
    }
}
