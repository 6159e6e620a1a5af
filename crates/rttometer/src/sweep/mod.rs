//! Sweep discovery and aggregation.
//!
//! A sweep directory holds one raw log per configured period, named by a
//! [`PeriodPattern`]. [`aggregate_sweep`] runs parse → derive → statistics
//! over every matching file and folds the results into a [`SweepTable`]
//! ordered by configured period.
//!
//! [`SweepTable`]: rttometer_core::SweepTable

mod aggregate;
mod pattern;

pub use aggregate::{
    aggregate_files, aggregate_sweep, analyze_file, discover_sweep_files, load_derived,
    summarize_log, SweepFile,
};
pub use pattern::PeriodPattern;

use std::fmt;
use std::path::PathBuf;

use rttometer_core::{DuplicatePeriod, StatsError};

use crate::data::DataError;

/// Errors that abort a sweep.
///
/// No partial table is produced when any of these occur.
#[derive(Debug)]
pub enum SweepError {
    /// The sweep directory could not be listed.
    Discovery {
        /// The sweep directory.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A log file is malformed or unreadable.
    Data {
        /// The offending log file.
        path: PathBuf,
        /// Parse error.
        source: DataError,
    },

    /// A statistic could not be computed for a sweep point.
    Stats {
        /// The offending log file.
        path: PathBuf,
        /// Statistics error.
        source: StatsError,
    },

    /// Two files encode the same configured period.
    DuplicatePeriod {
        /// The repeated period.
        period: u64,
        /// First file with this period.
        first: PathBuf,
        /// Second file with this period.
        second: PathBuf,
    },

    /// The points did not form a valid table.
    Table(DuplicatePeriod),
}

impl SweepError {
    /// Path of the file or directory the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            SweepError::Discovery { path, .. }
            | SweepError::Data { path, .. }
            | SweepError::Stats { path, .. } => Some(path),
            SweepError::DuplicatePeriod { second, .. } => Some(second),
            SweepError::Table(_) => None,
        }
    }
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::Discovery { path, source } => {
                write!(f, "cannot list sweep directory {}: {}", path.display(), source)
            }
            SweepError::Data { path, source } => write!(f, "{}: {}", path.display(), source),
            SweepError::Stats { path, source } => write!(f, "{}: {}", path.display(), source),
            SweepError::DuplicatePeriod {
                period,
                first,
                second,
            } => write!(
                f,
                "configured period {} appears in both {} and {}",
                period,
                first.display(),
                second.display()
            ),
            SweepError::Table(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::Discovery { source, .. } => Some(source),
            SweepError::Data { source, .. } => Some(source),
            SweepError::Stats { source, .. } => Some(source),
            SweepError::Table(e) => Some(e),
            SweepError::DuplicatePeriod { .. } => None,
        }
    }
}

impl From<DuplicatePeriod> for SweepError {
    fn from(e: DuplicatePeriod) -> Self {
        SweepError::Table(e)
    }
}
