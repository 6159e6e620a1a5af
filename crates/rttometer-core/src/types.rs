//! Probe records and their derived form.

use serde::{Deserialize, Serialize};

/// One observed request/reply exchange, in microseconds.
///
/// `start_time` and `reply_time` are monotonic timestamps taken by the probe.
/// `rtt` is computed upstream and trusted as given; it is never recomputed
/// from the two timestamps and no sign or magnitude check is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Send timestamp.
    pub start_time: i64,
    /// Receive timestamp.
    pub reply_time: i64,
    /// Round-trip time, if the log carried a third column for this row.
    pub rtt: Option<i64>,
}

impl Record {
    /// Create a new record.
    pub fn new(start_time: i64, reply_time: i64, rtt: Option<i64>) -> Self {
        Self {
            start_time,
            reply_time,
            rtt,
        }
    }
}

/// A [`Record`] annotated with its position and inter-arrival periods.
///
/// Periods are signed differences against the immediately preceding record
/// and are `None` for the first record of a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedRecord {
    /// The underlying record.
    #[serde(flatten)]
    pub record: Record,
    /// 1-based position in the log.
    pub sequence_index: usize,
    /// `start_time` minus the previous record's `start_time`.
    pub request_period: Option<i64>,
    /// `reply_time` minus the previous record's `reply_time`.
    pub reply_period: Option<i64>,
}

impl DerivedRecord {
    /// Send timestamp of the underlying record.
    pub fn start_time(&self) -> i64 {
        self.record.start_time
    }

    /// Receive timestamp of the underlying record.
    pub fn reply_time(&self) -> i64 {
        self.record.reply_time
    }

    /// Round-trip time of the underlying record.
    pub fn rtt(&self) -> Option<i64> {
        self.record.rtt
    }
}
