//! Sample moments using Welford's algorithm.
//!
//! Mean and sample variance (n-1 denominator) are accumulated in a single
//! sequential pass, which is numerically stable and keeps the result
//! independent of anything but input order.

use crate::error::StatsError;
use crate::math;

/// Online mean/variance accumulator using Welford's algorithm.
///
/// # Example
///
/// ```
/// use rttometer_core::statistics::OnlineStats;
///
/// let mut stats = OnlineStats::new();
/// for x in [1.0, 2.0, 3.0, 4.0, 5.0] {
///     stats.update(x);
/// }
/// let snapshot = stats.finalize();
/// assert_eq!(snapshot.mean, Some(3.0));
/// assert_eq!(snapshot.variance, Some(2.5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OnlineStats {
    /// Number of samples seen.
    count: usize,
    /// Running mean.
    mean: f64,
    /// Welford's M2: sum of squared deviations from current mean.
    m2: f64,
}

impl OnlineStats {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an accumulator from a sequence of values, in order.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut stats = Self::new();
        for x in values {
            stats.update(x);
        }
        stats
    }

    /// Update statistics with a new sample.
    pub fn update(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = x - self.mean;
        self.m2 += delta * delta2;
    }

    /// Get the current sample count.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Finalize and return the computed statistics.
    ///
    /// `mean` is `None` with no samples; `variance` is `None` with fewer
    /// than two.
    pub fn finalize(&self) -> StatsSnapshot {
        let mean = (self.count > 0).then_some(self.mean);
        let variance = (self.count > 1).then(|| self.m2 / (self.count - 1) as f64);
        StatsSnapshot {
            mean,
            variance,
            count: self.count,
        }
    }
}

/// Snapshot of accumulated statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    /// Sample mean.
    pub mean: Option<f64>,
    /// Sample variance (using n-1 denominator).
    pub variance: Option<f64>,
    /// Number of samples.
    pub count: usize,
}

impl StatsSnapshot {
    /// Get the sample standard deviation.
    pub fn std_dev(&self) -> Option<f64> {
        self.variance.map(math::sqrt)
    }
}

/// Sample standard deviation of `values`, or `None` with fewer than two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    OnlineStats::from_values(values.iter().copied())
        .finalize()
        .std_dev()
}

/// Coefficient of variation (sample std / mean) of a series.
///
/// - Empty series: `InsufficientData`
/// - Zero mean: `DivisionUndefined`, whatever the series length
/// - One value: `Ok(None)`, the standard deviation is unavailable
pub fn coefficient_of_variation(
    values: &[f64],
    statistic: &'static str,
) -> Result<Option<f64>, StatsError> {
    let snapshot = OnlineStats::from_values(values.iter().copied()).finalize();
    let mean = snapshot
        .mean
        .ok_or(StatsError::InsufficientData { statistic })?;

    if mean == 0.0 {
        return Err(StatsError::DivisionUndefined { statistic });
    }
    Ok(snapshot.std_dev().map(|std| std / mean))
}
