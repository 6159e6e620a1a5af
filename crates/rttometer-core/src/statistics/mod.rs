//! Statistical methods for RTT and period series.
//!
//! - Percentiles using linear interpolation between the two nearest ranks
//! - Sample mean and standard deviation via Welford accumulation
//! - Coefficient of variation with an explicit zero-mean failure
//!
//! All reductions run sequentially over the input order, so results are
//! reproducible bit-for-bit for the same input.

mod moments;
mod quantile;

pub use moments::{coefficient_of_variation, sample_std, OnlineStats, StatsSnapshot};
pub use quantile::{percentile, percentile_sorted, sort_values};
