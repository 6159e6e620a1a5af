//! Core statistics for round-trip-time sweeps.
//!
//! This crate holds the data model and the numerical part of the sweep
//! pipeline: turning an ordered sequence of probe [`Record`]s into
//! [`DerivedRecord`]s, reducing them to per-sweep-point statistics, and
//! assembling those into a [`SweepTable`] ordered by configured period.
//!
//! It has no I/O and works in `no_std` environments with an allocator.
//! File parsing, discovery and export live in the `rttometer` crate.
//!
//! # Features
//!
//! - `std` (default): Enable standard library support (`std::error::Error` impls)
//!
//! # Usage
//!
//! ```
//! use rttometer_core::{derive_records, Record, SweepPoint};
//!
//! let records = vec![
//!     Record::new(100, 150, Some(50)),
//!     Record::new(200, 260, Some(60)),
//!     Record::new(305, 375, Some(70)),
//! ];
//! let derived = derive_records(&records).unwrap();
//! assert_eq!(derived[2].request_period, Some(105));
//!
//! let point = SweepPoint::from_records(500, &derived).unwrap();
//! assert!((point.rtt_p90 - 68.0).abs() < 1e-9);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod derive;
pub mod error;
pub mod math;
pub mod result;
pub mod statistics;
pub mod types;

pub use derive::derive_records;
pub use error::{DuplicatePeriod, PeriodOverflow, StatsError};
pub use result::{RttSummary, SweepPoint, SweepTable, RTT_PERCENTILE};
pub use types::{DerivedRecord, Record};
