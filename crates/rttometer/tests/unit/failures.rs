//! A bad file aborts the whole sweep.

use rttometer::{aggregate_sweep, DataError, StatsError, SweepConfig, SweepError};

use crate::helpers::{SweepDir, EXAMPLE_LOG};

#[test]
fn one_token_line_is_malformed() {
    let sweep = SweepDir::new()
        .with_file("output_500mcu", EXAMPLE_LOG)
        .with_file("output_600mcu", "100 150 50\n200\n");

    let err = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap_err();
    match err {
        SweepError::Data { path, source } => {
            assert!(path.ends_with("output_600mcu"));
            assert!(matches!(source, DataError::MissingField { line: 2, .. }));
        }
        other => panic!("Expected Data error, got {:?}", other),
    }
}

#[test]
fn non_integer_token_is_malformed() {
    let sweep = SweepDir::new().with_file("output_500mcu", "100 150 5.5\n");

    let err = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        SweepError::Data {
            source: DataError::InvalidValue { line: 1, .. },
            ..
        }
    ));
}

#[test]
fn log_without_rtt_column_is_insufficient() {
    let sweep = SweepDir::new().with_file("output_500mcu", "100 150\n200 260\n");

    let err = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap_err();
    match err {
        SweepError::Stats { source, .. } => {
            assert_eq!(source, StatsError::InsufficientData { statistic: "rtt_p90" });
        }
        other => panic!("Expected Stats error, got {:?}", other),
    }
}

#[test]
fn single_record_log_has_no_periods() {
    let sweep = SweepDir::new().with_file("output_500mcu", "100 150 50\n");

    let err = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap_err();
    match err {
        SweepError::Stats { source, .. } => {
            assert_eq!(source.statistic(), "request_period_cv");
        }
        other => panic!("Expected Stats error, got {:?}", other),
    }
}

#[test]
fn zero_mean_period_is_division_undefined() {
    // request periods [10, -10] average to zero
    let sweep = SweepDir::new().with_file("output_500mcu", "100 150 50\n110 170 60\n100 190 90\n");

    let err = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap_err();
    match err {
        SweepError::Stats { source, .. } => {
            assert_eq!(
                source,
                StatsError::DivisionUndefined {
                    statistic: "request_period_cv"
                }
            );
        }
        other => panic!("Expected Stats error, got {:?}", other),
    }
}

#[test]
fn repeated_timestamps_are_division_undefined() {
    // A single zero period per series still has a zero mean
    let sweep = SweepDir::new().with_file("output_500mcu", "100 150 50\n100 150 50\n");

    let err = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap_err();
    match err {
        SweepError::Stats { source, .. } => {
            assert_eq!(
                source,
                StatsError::DivisionUndefined {
                    statistic: "request_period_cv"
                }
            );
        }
        other => panic!("Expected Stats error, got {:?}", other),
    }
}

#[test]
fn overflowing_period_is_malformed() {
    let content = format!("{} 0 5\n{} 10 5\n", i64::MIN, i64::MAX);
    let sweep = SweepDir::new().with_file("output_500mcu", &content);

    let err = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap_err();
    match err {
        SweepError::Data {
            path,
            source: DataError::PeriodOverflow(overflow),
        } => {
            assert!(path.ends_with("output_500mcu"));
            assert_eq!(overflow.sequence_index, 2);
            assert_eq!(overflow.period, "request_period");
        }
        other => panic!("Expected PeriodOverflow, got {:?}", other),
    }
}

#[test]
fn duplicate_periods_are_rejected() {
    let sweep = SweepDir::new()
        .with_file("output_500mcu", EXAMPLE_LOG)
        .with_file("output_0500mcu", EXAMPLE_LOG);

    let err = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap_err();
    assert!(matches!(err, SweepError::DuplicatePeriod { period: 500, .. }));
    assert!(err.to_string().contains("500"));
}

#[test]
fn missing_directory_is_discovery_error() {
    let sweep = SweepDir::new();
    let missing = sweep.join("does-not-exist");

    let err = aggregate_sweep(&missing, &SweepConfig::default()).unwrap_err();
    assert!(matches!(err, SweepError::Discovery { .. }));
    assert_eq!(err.path(), Some(missing.as_path()));
}
