//! Shared sweep-directory builders.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// The three-record log used throughout: rtt [50, 60, 70].
pub const EXAMPLE_LOG: &str = "100 150 50\n200 260 60\n305 375 70\n";

/// A temp sweep directory with named log files.
pub struct SweepDir {
    dir: TempDir,
}

impl SweepDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn with_file(self, name: &str, content: &str) -> Self {
        fs::write(self.dir.path().join(name), content).expect("write log");
        self
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Log with rtt values `base, base+10, ...` and slightly jittered periods.
pub fn synthetic_log(count: usize, period: i64, base_rtt: i64) -> String {
    let mut out = String::from("# start reply rtt\n");
    let mut start = 1_000;
    for i in 0..count as i64 {
        let rtt = base_rtt + 10 * i;
        out.push_str(&format!("{} {} {}\n", start, start + rtt, rtt));
        start += period + (i % 3);
    }
    out
}
