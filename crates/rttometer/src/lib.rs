//! # rttometer
//!
//! Characterize round-trip-time behavior of a periodic probe across a sweep of
//! configured sending periods.
//!
//! The probe writes one raw log per sweep point, named so that the file name
//! encodes the configured period (e.g. `output_500mcu`). This crate:
//! - Parses each log into timestamped records (strict, fail-fast)
//! - Derives per-record request/reply periods
//! - Reduces each log to RTT p90, RTT std-dev and period coefficients of variation
//! - Assembles a summary table ordered by configured period and writes it as CSV
//!
//! ## Quick Start
//!
//! ```no_run
//! use rttometer::{aggregate_sweep, data::write_summary_csv, SweepConfig};
//! use std::path::Path;
//!
//! let table = aggregate_sweep(Path::new("measures"), &SweepConfig::default())?;
//! write_summary_csv(&table, Path::new("all_master.csv"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! A single malformed or statistically empty log aborts the whole sweep:
//! downstream comparison across sweep points assumes the table is complete.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;

pub mod data;
pub mod output;
pub mod sweep;

pub use config::{ConfigError, SweepConfig};
pub use data::{parse_log, DataError};
pub use sweep::{
    aggregate_files, aggregate_sweep, analyze_file, discover_sweep_files, load_derived,
    summarize_log, PeriodPattern, SweepError, SweepFile,
};

// Re-export the core data model
pub use rttometer_core::{
    derive_records, DerivedRecord, PeriodOverflow, Record, RttSummary, StatsError, SweepPoint,
    SweepTable, RTT_PERCENTILE,
};
