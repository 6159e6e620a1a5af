//! End-to-end aggregation over a sweep directory.

use rttometer::data::{read_summary_csv, write_summary_csv};
use rttometer::{aggregate_sweep, PeriodPattern, SweepConfig};

use crate::helpers::{synthetic_log, SweepDir, EXAMPLE_LOG};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn example_log_produces_expected_point() {
    let sweep = SweepDir::new().with_file("output_500mcu", EXAMPLE_LOG);
    let table = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap();

    assert_eq!(table.len(), 1);
    let p = table.get(500).unwrap();
    assert!(approx(p.rtt_p90, 68.0));
    assert!(approx(p.rtt_std.unwrap(), 10.0));

    // request periods [100, 105], reply periods [110, 115]
    let std = 5.0 / 2f64.sqrt();
    assert!(approx(p.request_period_cv.unwrap(), std / 102.5));
    assert!(approx(p.reply_period_cv.unwrap(), std / 112.5));
}

#[test]
fn non_matching_files_are_skipped() {
    let sweep = SweepDir::new()
        .with_file("output_500mcu", EXAMPLE_LOG)
        .with_file("notes.txt", "this is not a log\n")
        .with_file("output_60us", "garbage");

    let table = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap();
    let periods: Vec<u64> = table.iter().map(|p| p.configured_period).collect();
    assert_eq!(periods, vec![500]);
}

#[test]
fn table_is_ordered_by_period_not_name() {
    let sweep = SweepDir::new()
        .with_file("output_1000mcu", &synthetic_log(20, 1000, 40))
        .with_file("output_50mcu", &synthetic_log(20, 50, 400))
        .with_file("output_200mcu", &synthetic_log(20, 200, 90));

    let table = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap();
    let periods: Vec<u64> = table.iter().map(|p| p.configured_period).collect();
    assert_eq!(periods, vec![50, 200, 1000]);
}

#[test]
fn empty_directory_gives_empty_table() {
    let sweep = SweepDir::new();
    let table = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap();
    assert!(table.is_empty());
}

#[test]
fn custom_pattern_selects_other_files() {
    let sweep = SweepDir::new()
        .with_file("period-80us.log", EXAMPLE_LOG)
        .with_file("output_500mcu", EXAMPLE_LOG);

    let config = SweepConfig::new().pattern(PeriodPattern::new("period-", "us"));
    let table = aggregate_sweep(sweep.path(), &config).unwrap();
    let periods: Vec<u64> = table.iter().map(|p| p.configured_period).collect();
    assert_eq!(periods, vec![80]);
}

#[test]
fn two_runs_write_identical_bytes() {
    let sweep = SweepDir::new()
        .with_file("output_50mcu", &synthetic_log(50, 50, 300))
        .with_file("output_500mcu", &synthetic_log(50, 500, 70))
        .with_file("output_5000mcu", &synthetic_log(2, 5000, 60));
    let out = tempfile::TempDir::new().unwrap();
    let first = out.path().join("first.csv");
    let second = out.path().join("second.csv");

    let config = SweepConfig::default();
    write_summary_csv(&aggregate_sweep(sweep.path(), &config).unwrap(), &first).unwrap();
    write_summary_csv(&aggregate_sweep(sweep.path(), &config).unwrap(), &second).unwrap();

    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn parallel_flag_does_not_change_output() {
    let sweep = SweepDir::new()
        .with_file("output_50mcu", &synthetic_log(30, 50, 300))
        .with_file("output_100mcu", &synthetic_log(30, 100, 200))
        .with_file("output_500mcu", &synthetic_log(30, 500, 70));

    let sequential = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap();
    let parallel = aggregate_sweep(sweep.path(), &SweepConfig::default().parallel(true)).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn single_period_log_has_unavailable_cv() {
    // One rtt value and one period per series
    let sweep = SweepDir::new().with_file("output_5000mcu", "100 160 60\n200 250\n");
    let table = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap();

    let p = table.get(5000).unwrap();
    assert_eq!(p.rtt_p90, 60.0);
    assert_eq!(p.rtt_std, None);
    assert_eq!(p.request_period_cv, None);
    assert_eq!(p.reply_period_cv, None);

    let csv_dir = tempfile::TempDir::new().unwrap();
    let csv = csv_dir.path().join("all_master.csv");
    write_summary_csv(&table, &csv).unwrap();
    let back = read_summary_csv(&csv).unwrap();
    assert_eq!(back, table);
}
