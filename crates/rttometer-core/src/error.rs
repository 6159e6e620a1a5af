//! Error types for statistics computation.

use core::fmt;

/// Error returned when a summary statistic cannot be computed.
///
/// Both variants are fatal for the sweep point they occur in. They replace
/// the NaN/infinity values a plain floating-point computation would emit so
/// that an undefined statistic never reaches the summary table unnoticed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// The statistic has no values to operate on.
    InsufficientData {
        /// Name of the statistic (e.g. `"rtt_p90"`).
        statistic: &'static str,
    },

    /// The denominator of a ratio statistic is zero.
    ///
    /// Raised for a coefficient of variation whose series has a zero mean.
    DivisionUndefined {
        /// Name of the statistic (e.g. `"request_period_cv"`).
        statistic: &'static str,
    },
}

impl StatsError {
    /// Name of the statistic that failed.
    pub fn statistic(&self) -> &'static str {
        match self {
            Self::InsufficientData { statistic } | Self::DivisionUndefined { statistic } => {
                statistic
            }
        }
    }
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData { statistic } => {
                write!(f, "insufficient data to compute {}", statistic)
            }
            Self::DivisionUndefined { statistic } => {
                write!(f, "{} is undefined: series mean is zero", statistic)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Two sweep points share the same configured period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicatePeriod {
    /// The repeated configured period.
    pub period: u64,
}

impl fmt::Display for DuplicatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate configured period {} in sweep table", self.period)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DuplicatePeriod {}

/// A request or reply period does not fit in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodOverflow {
    /// 1-based index of the record whose period overflowed.
    pub sequence_index: usize,
    /// Which period overflowed (`"request_period"` or `"reply_period"`).
    pub period: &'static str,
}

impl fmt::Display for PeriodOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of record {} overflows a 64-bit integer",
            self.period, self.sequence_index
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PeriodOverflow {}
