//! Running the per-file pipeline over a sweep directory.

use std::fs;
use std::path::{Path, PathBuf};

use rttometer_core::{derive_records, DerivedRecord, RttSummary, SweepPoint, SweepTable};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{PeriodPattern, SweepError};
use crate::config::SweepConfig;
use crate::data::{parse_log, DataError};

/// A log file that is part of a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepFile {
    /// Path of the raw log.
    pub path: PathBuf,
    /// Period extracted from the file name.
    pub configured_period: u64,
}

/// List the files in `dir` whose names match `pattern`.
///
/// Non-matching names and non-files are skipped and logged. The result is
/// ordered by configured period.
///
/// # Errors
///
/// - `Discovery` if the directory cannot be listed
/// - `DuplicatePeriod` if two file names encode the same period
pub fn discover_sweep_files(
    dir: &Path,
    pattern: &PeriodPattern,
) -> Result<Vec<SweepFile>, SweepError> {
    let discovery_err = |source| SweepError::Discovery {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(discovery_err)? {
        let path = entry.map_err(discovery_err)?.path();
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping file with non-UTF-8 name");
            continue;
        };

        match pattern.extract(name) {
            Some(configured_period) => files.push(SweepFile {
                path,
                configured_period,
            }),
            None => {
                tracing::warn!(
                    file = name,
                    prefix = %pattern.prefix,
                    suffix = %pattern.suffix,
                    "skipping file: name does not encode a configured period"
                );
            }
        }
    }

    files.sort_by(|a, b| {
        a.configured_period
            .cmp(&b.configured_period)
            .then_with(|| a.path.cmp(&b.path))
    });

    if let Some(pair) = files
        .windows(2)
        .find(|w| w[0].configured_period == w[1].configured_period)
    {
        return Err(SweepError::DuplicatePeriod {
            period: pair[0].configured_period,
            first: pair[0].path.clone(),
            second: pair[1].path.clone(),
        });
    }

    Ok(files)
}

/// Parse and derive one raw log.
///
/// A period that overflows `i64` is reported as malformed input.
pub fn load_derived(path: &Path) -> Result<Vec<DerivedRecord>, SweepError> {
    let data_err = |source| SweepError::Data {
        path: path.to_path_buf(),
        source,
    };
    let records = parse_log(path).map_err(data_err)?;
    derive_records(&records).map_err(|e| data_err(DataError::from(e)))
}

/// Compute the sweep point for one file.
pub fn analyze_file(file: &SweepFile) -> Result<SweepPoint, SweepError> {
    let derived = load_derived(&file.path)?;
    let point = SweepPoint::from_records(file.configured_period, &derived).map_err(|source| {
        SweepError::Stats {
            path: file.path.clone(),
            source,
        }
    })?;

    tracing::debug!(
        period = point.configured_period,
        records = derived.len(),
        rtt_p90 = point.rtt_p90,
        rtt_std = ?point.rtt_std,
        request_period_cv = ?point.request_period_cv,
        reply_period_cv = ?point.reply_period_cv,
        "computed sweep point"
    );
    Ok(point)
}

/// Summarize the RTT distribution of a single log.
pub fn summarize_log(path: &Path) -> Result<(Vec<DerivedRecord>, RttSummary), SweepError> {
    let derived = load_derived(path)?;
    let summary = RttSummary::from_records(&derived).map_err(|source| SweepError::Stats {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((derived, summary))
}

/// Aggregate every matching log in `dir` into a summary table.
///
/// # Errors
///
/// Any discovery, parse or statistics failure aborts the sweep; no partial
/// table is returned.
pub fn aggregate_sweep(dir: &Path, config: &SweepConfig) -> Result<SweepTable, SweepError> {
    let files = discover_sweep_files(dir, &config.pattern)?;
    aggregate_files(&files, config, |_| {})
}

/// Aggregate already discovered files, calling `on_file` after each one.
///
/// With the `parallel` feature and `config.parallel` set, files are processed
/// concurrently and `on_file` may be called from several threads. The table
/// is ordered by configured period either way.
pub fn aggregate_files<F>(
    files: &[SweepFile],
    config: &SweepConfig,
    on_file: F,
) -> Result<SweepTable, SweepError>
where
    F: Fn(&SweepFile) + Sync,
{
    let process = |file: &SweepFile| -> Result<SweepPoint, SweepError> {
        let point = analyze_file(file)?;
        on_file(file);
        Ok(point)
    };

    let points: Vec<SweepPoint> = if use_parallel(config) {
        run_parallel(files, &process)?
    } else {
        files.iter().map(process).collect::<Result<_, SweepError>>()?
    };

    let table = SweepTable::from_points(points)?;
    tracing::info!(points = table.len(), "sweep aggregated");
    Ok(table)
}

fn use_parallel(config: &SweepConfig) -> bool {
    cfg!(feature = "parallel") && config.parallel
}

#[cfg(feature = "parallel")]
fn run_parallel<P>(files: &[SweepFile], process: &P) -> Result<Vec<SweepPoint>, SweepError>
where
    P: Fn(&SweepFile) -> Result<SweepPoint, SweepError> + Sync,
{
    files.par_iter().map(process).collect()
}

#[cfg(not(feature = "parallel"))]
fn run_parallel<P>(files: &[SweepFile], process: &P) -> Result<Vec<SweepPoint>, SweepError>
where
    P: Fn(&SweepFile) -> Result<SweepPoint, SweepError> + Sync,
{
    files.iter().map(process).collect()
}
