//! Percentile computation using linear interpolation between closest ranks.
//!
//! This is the "linear" estimator (Hyndman & Fan Type 7), the default of most
//! numerical packages:
//!
//! ```text
//! h = (n - 1) * p
//! q = x[floor(h)] + (h - floor(h)) * (x[ceil(h)] - x[floor(h)])
//! ```
//!
//! The interpolation step is evaluated from whichever end of the bracketing
//! pair is closer to `h`, which keeps the result exact at both endpoints.
//!
//! # Input Requirements
//!
//! All input data must be finite. In debug builds this is checked via
//! assertions. RTT inputs come from integer microsecond columns and are always
//! finite.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::StatsError;
use crate::math;

/// Debug assertion that all values in the slice are finite.
#[inline]
fn debug_assert_finite(data: &[f64]) {
    debug_assert!(
        data.iter().all(|x| x.is_finite()),
        "percentile input must be finite (no NaN or infinity)"
    );
}

/// Copy and sort values in ascending order.
pub fn sort_values(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    sorted
}

/// Compute a percentile over pre-sorted values.
///
/// # Arguments
///
/// * `sorted` - Values that MUST be sorted in ascending order
/// * `p` - Probability in [0, 1]
///
/// # Panics
///
/// Panics if `sorted` is empty or if `p` is outside [0, 1].
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "Cannot compute percentile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "Percentile probability must be in [0, 1]"
    );
    debug_assert_finite(sorted);

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let h = (n - 1) as f64 * p;
    let lo = (math::floor(h) as usize).min(n - 1);
    let hi = (math::ceil(h) as usize).min(n - 1);

    let a = sorted[lo];
    let b = sorted[hi];
    if lo == hi {
        return a;
    }

    let t = h - lo as f64;
    let diff = b - a;
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}

/// Compute a percentile over unsorted values.
///
/// Returns `InsufficientData` (tagged with `statistic`) if `data` is empty.
pub fn percentile(data: &[f64], p: f64, statistic: &'static str) -> Result<f64, StatsError> {
    if data.is_empty() {
        return Err(StatsError::InsufficientData { statistic });
    }
    Ok(percentile_sorted(&sort_values(data), p))
}
