//! Summary statistics per sweep point and the cross-sweep table.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::error::{DuplicatePeriod, StatsError};
use crate::statistics::{coefficient_of_variation, percentile_sorted, sample_std, sort_values};
use crate::types::DerivedRecord;

/// Percentile reported as `rtt_p90`.
pub const RTT_PERCENTILE: f64 = 0.9;

fn rtt_values(records: &[DerivedRecord]) -> Vec<f64> {
    records
        .iter()
        .filter_map(|r| r.rtt())
        .map(|v| v as f64)
        .collect()
}

fn period_values(records: &[DerivedRecord], period: fn(&DerivedRecord) -> Option<i64>) -> Vec<f64> {
    records
        .iter()
        .filter_map(period)
        .map(|v| v as f64)
        .collect()
}

/// Statistics for one configured sending period.
///
/// `None` marks a statistic that is unavailable for this point (a standard
/// deviation over fewer than two values). It is never a stand-in for zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Sending period the probe was configured with, in microseconds.
    pub configured_period: u64,
    /// 90th percentile of RTT, linear interpolation.
    pub rtt_p90: f64,
    /// Sample standard deviation of RTT.
    pub rtt_std: Option<f64>,
    /// Coefficient of variation of the request period.
    pub request_period_cv: Option<f64>,
    /// Coefficient of variation of the reply period.
    pub reply_period_cv: Option<f64>,
}

impl SweepPoint {
    /// Reduce a derived log to its sweep-point statistics.
    ///
    /// Absent values (first-record periods, rows without an RTT column) are
    /// excluded, never treated as zero.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` if no RTT values are present, or a period series
    ///   is empty (a log with fewer than two records)
    /// - `DivisionUndefined` if a period series has zero mean
    pub fn from_records(
        configured_period: u64,
        records: &[DerivedRecord],
    ) -> Result<Self, StatsError> {
        let rtt = rtt_values(records);
        if rtt.is_empty() {
            return Err(StatsError::InsufficientData {
                statistic: "rtt_p90",
            });
        }
        let rtt_p90 = percentile_sorted(&sort_values(&rtt), RTT_PERCENTILE);
        let rtt_std = sample_std(&rtt);

        let request = period_values(records, |r| r.request_period);
        let reply = period_values(records, |r| r.reply_period);

        Ok(Self {
            configured_period,
            rtt_p90,
            rtt_std,
            request_period_cv: coefficient_of_variation(&request, "request_period_cv")?,
            reply_period_cv: coefficient_of_variation(&reply, "reply_period_cv")?,
        })
    }
}

/// Sweep points ordered ascending by configured period.
///
/// Periods are unique. The table is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SweepPoint>", into = "Vec<SweepPoint>")]
pub struct SweepTable {
    points: Vec<SweepPoint>,
}

impl SweepTable {
    /// Build a table from points in any order.
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePeriod` if two points share a configured period.
    pub fn from_points<I>(points: I) -> Result<Self, DuplicatePeriod>
    where
        I: IntoIterator<Item = SweepPoint>,
    {
        let by_period = points
            .into_iter()
            .try_fold(BTreeMap::new(), |mut acc, point| {
                match acc.insert(point.configured_period, point) {
                    Some(_) => Err(DuplicatePeriod {
                        period: point.configured_period,
                    }),
                    None => Ok(acc),
                }
            })?;

        Ok(Self {
            points: by_period.into_values().collect(),
        })
    }

    /// Points in ascending configured-period order.
    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    /// Look up the point for a configured period.
    pub fn get(&self, configured_period: u64) -> Option<&SweepPoint> {
        self.points
            .binary_search_by_key(&configured_period, |p| p.configured_period)
            .ok()
            .map(|i| &self.points[i])
    }

    /// Number of sweep points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the table has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over points in ascending configured-period order.
    pub fn iter(&self) -> core::slice::Iter<'_, SweepPoint> {
        self.points.iter()
    }
}

impl TryFrom<Vec<SweepPoint>> for SweepTable {
    type Error = DuplicatePeriod;

    fn try_from(points: Vec<SweepPoint>) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}

impl From<SweepTable> for Vec<SweepPoint> {
    fn from(table: SweepTable) -> Self {
        table.points
    }
}

impl<'a> IntoIterator for &'a SweepTable {
    type Item = &'a SweepPoint;
    type IntoIter = core::slice::Iter<'a, SweepPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// RTT distribution summary for a single log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RttSummary {
    /// Number of RTT values present.
    pub count: usize,
    /// 50th percentile.
    pub median: f64,
    /// Sample standard deviation, unavailable with fewer than two values.
    pub std: Option<f64>,
    /// 90th percentile.
    pub p90: f64,
    /// 95th percentile.
    pub p95: f64,
    /// 99th percentile.
    pub p99: f64,
    /// Largest RTT.
    pub max: f64,
}

impl RttSummary {
    /// Summarize the RTT column of a derived log.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` if no RTT values are present.
    pub fn from_records(records: &[DerivedRecord]) -> Result<Self, StatsError> {
        let rtt = rtt_values(records);
        if rtt.is_empty() {
            return Err(StatsError::InsufficientData {
                statistic: "rtt_summary",
            });
        }
        let sorted = sort_values(&rtt);

        Ok(Self {
            count: rtt.len(),
            median: percentile_sorted(&sorted, 0.5),
            std: sample_std(&rtt),
            p90: percentile_sorted(&sorted, 0.90),
            p95: percentile_sorted(&sorted, 0.95),
            p99: percentile_sorted(&sorted, 0.99),
            max: sorted[sorted.len() - 1],
        })
    }
}
