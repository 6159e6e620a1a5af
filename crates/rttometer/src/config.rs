//! Configuration for a sweep run.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::sweep::PeriodPattern;

/// Options controlling how a sweep directory is aggregated.
///
/// Every field has a default, so a JSON config file only needs the keys it
/// overrides:
///
/// ```
/// use rttometer::SweepConfig;
///
/// let config: SweepConfig = serde_json::from_str(r#"{"pattern": {"suffix": "us"}}"#)?;
/// assert_eq!(config.pattern.prefix, "output_");
/// assert_eq!(config.pattern.suffix, "us");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// File-name convention used to find sweep files and their periods.
    pub pattern: PeriodPattern,

    /// Process files concurrently when built with the `parallel` feature.
    ///
    /// Has no effect otherwise. Output is identical either way.
    pub parallel: bool,
}

impl SweepConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the file-name pattern.
    pub fn pattern(mut self, pattern: PeriodPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Set the pattern prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.pattern.prefix = prefix.into();
        self
    }

    /// Set the pattern suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.pattern.suffix = suffix.into();
        self
    }

    /// Enable or disable concurrent file processing.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Errors that can occur when loading a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file is not a valid config.
    Json {
        /// Config file path.
        path: PathBuf,
        /// Deserialization error.
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Json { path, source } => {
                write!(f, "invalid config {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Json { source, .. } => Some(source),
        }
    }
}
