//! File-name convention that encodes the configured period.

use serde::{Deserialize, Serialize};

/// Matches `<prefix><digits><suffix>` anywhere in a file name.
///
/// The default pattern is `output_<N>mcu`, the name the sweep driver gives
/// each probe run. A name that does not match is not an error: the file is
/// simply not part of the sweep.
///
/// # Example
///
/// ```
/// use rttometer::PeriodPattern;
///
/// let pattern = PeriodPattern::default();
/// assert_eq!(pattern.extract("output_500mcu"), Some(500));
/// assert_eq!(pattern.extract("notes.txt"), None);
/// assert_eq!(pattern.file_name(500), "output_500mcu");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodPattern {
    /// Literal text immediately before the period digits.
    pub prefix: String,
    /// Literal text immediately after the period digits.
    pub suffix: String,
}

impl Default for PeriodPattern {
    fn default() -> Self {
        Self {
            prefix: "output_".to_string(),
            suffix: "mcu".to_string(),
        }
    }
}

impl PeriodPattern {
    /// Create a pattern from a prefix and suffix.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Extract the configured period from a file name.
    ///
    /// Scans for the first occurrence of prefix, one or more ASCII digits and
    /// suffix. Returns `None` if there is no such occurrence or the digits do
    /// not fit in a `u64`.
    pub fn extract(&self, file_name: &str) -> Option<u64> {
        let mut from = 0;

        while let Some(offset) = file_name[from..].find(self.prefix.as_str()) {
            let digits_start = from + offset + self.prefix.len();
            let rest = &file_name[digits_start..];
            let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();

            if digits_len > 0 && rest[digits_len..].starts_with(self.suffix.as_str()) {
                if let Ok(period) = rest[..digits_len].parse() {
                    return Some(period);
                }
            }

            // Advance past this prefix occurrence by one character
            from += offset + file_name[from + offset..].chars().next()?.len_utf8();
        }

        None
    }

    /// File name the sweep driver writes for a configured period.
    pub fn file_name(&self, period: u64) -> String {
        format!("{}{}{}", self.prefix, period, self.suffix)
    }
}
