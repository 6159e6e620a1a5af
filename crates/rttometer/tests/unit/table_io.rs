//! Summary-table and derived-record files.

use std::fs;

use rttometer::data::{read_summary_csv, write_derived_csv, write_summary_csv, DERIVED_HEADER};
use rttometer::{aggregate_sweep, load_derived, summarize_log, DataError, SweepConfig};

use crate::helpers::{synthetic_log, SweepDir, EXAMPLE_LOG};

#[test]
fn written_table_reads_back_identically() {
    let sweep = SweepDir::new()
        .with_file("output_50mcu", &synthetic_log(40, 50, 350))
        .with_file("output_70mcu", &synthetic_log(40, 70, 210))
        .with_file("output_500mcu", EXAMPLE_LOG);
    let table = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap();

    let out = tempfile::NamedTempFile::new().unwrap();
    write_summary_csv(&table, out.path()).unwrap();
    let back = read_summary_csv(out.path()).unwrap();

    assert_eq!(back, table);
    let periods: Vec<u64> = back.iter().map(|p| p.configured_period).collect();
    assert_eq!(periods, vec![50, 70, 500]);
}

#[test]
fn summary_csv_header_and_rows() {
    let sweep = SweepDir::new().with_file("output_500mcu", EXAMPLE_LOG);
    let table = aggregate_sweep(sweep.path(), &SweepConfig::default()).unwrap();

    let out = tempfile::NamedTempFile::new().unwrap();
    write_summary_csv(&table, out.path()).unwrap();
    let text = fs::read_to_string(out.path()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "configured_period,rtt_p90,rtt_std,request_period_cv,reply_period_cv"
    );
    assert!(lines[1].starts_with("500,68,10,"));
    assert_eq!(lines.len(), 2);
}

#[test]
fn reading_a_log_is_not_a_table() {
    let sweep = SweepDir::new().with_file("output_500mcu", EXAMPLE_LOG);
    let result = read_summary_csv(&sweep.join("output_500mcu"));
    assert!(matches!(result, Err(DataError::MalformedTable { line: 1, .. })));
}

#[test]
fn derived_export_matches_log() {
    let sweep = SweepDir::new().with_file("output_500mcu", EXAMPLE_LOG);
    let derived = load_derived(&sweep.join("output_500mcu")).unwrap();

    let out = sweep.join("master.csv");
    write_derived_csv(&derived, &out).unwrap();

    let expected = format!(
        "{}\n100,150,50,1,,\n200,260,60,2,100,110\n305,375,70,3,105,115\n",
        DERIVED_HEADER
    );
    assert_eq!(fs::read_to_string(&out).unwrap(), expected);
}

#[test]
fn summarize_example_log() {
    let sweep = SweepDir::new().with_file("output_500mcu", EXAMPLE_LOG);
    let (derived, summary) = summarize_log(&sweep.join("output_500mcu")).unwrap();

    assert_eq!(derived.len(), 3);
    assert_eq!(summary.count, 3);
    assert_eq!(summary.median, 60.0);
    assert!((summary.p90 - 68.0).abs() < 1e-9);
    assert_eq!(summary.max, 70.0);
    assert!((summary.std.unwrap() - 10.0).abs() < 1e-9);
}
