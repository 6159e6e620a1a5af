//! CSV export and import of the summary table and derived records.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rttometer_core::{DerivedRecord, SweepPoint, SweepTable};

use super::DataError;

/// CSV header for the summary table.
pub const SUMMARY_HEADER: &str =
    "configured_period,rtt_p90,rtt_std,request_period_cv,reply_period_cv";

/// CSV header for derived records.
pub const DERIVED_HEADER: &str =
    "start_time,reply_time,rtt,sequence_index,request_period,reply_period";

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write the summary table as CSV.
///
/// Floats use Rust's shortest round-trip representation, so the output is
/// byte-identical for identical tables and re-parses to the same values.
pub fn write_summary<W: Write>(table: &SweepTable, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", SUMMARY_HEADER)?;

    for p in table {
        writeln!(
            writer,
            "{},{},{},{},{}",
            p.configured_period,
            p.rtt_p90,
            opt(p.rtt_std),
            opt(p.request_period_cv),
            opt(p.reply_period_cv),
        )?;
    }

    Ok(())
}

/// Write the summary table to a CSV file.
pub fn write_summary_csv(table: &SweepTable, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_summary(table, &mut writer)?;
    writer.flush()
}

/// Write derived records as CSV.
pub fn write_derived<W: Write>(records: &[DerivedRecord], writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", DERIVED_HEADER)?;

    for r in records {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            r.start_time(),
            r.reply_time(),
            opt(r.rtt()),
            r.sequence_index,
            opt(r.request_period),
            opt(r.reply_period),
        )?;
    }

    Ok(())
}

/// Write derived records to a CSV file.
pub fn write_derived_csv(records: &[DerivedRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_derived(records, &mut writer)?;
    writer.flush()
}

/// Load a summary table written by [`write_summary_csv`].
pub fn read_summary_csv(path: &Path) -> Result<SweepTable, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_summary(BufReader::new(file), path)
}

/// Parse a summary table from any buffered reader.
///
/// Whitespace around fields is ignored and empty fields parse as unavailable.
/// `origin` names the source in IO errors.
pub fn parse_summary<R: BufRead>(reader: R, origin: &Path) -> Result<SweepTable, DataError> {
    let mut points = Vec::new();
    let mut saw_header = false;

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|source| DataError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
        let line_no = line_num + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        if !saw_header {
            let expected: Vec<&str> = SUMMARY_HEADER.split(',').collect();
            if fields != expected {
                return Err(DataError::MalformedTable {
                    line: line_no,
                    message: format!("expected header '{}'", SUMMARY_HEADER),
                });
            }
            saw_header = true;
            continue;
        }

        points.push(parse_row(&fields, line_no)?);
    }

    if !saw_header {
        return Err(DataError::MalformedTable {
            line: 1,
            message: "missing header".to_string(),
        });
    }

    SweepTable::from_points(points).map_err(|e| DataError::MalformedTable {
        line: 0,
        message: e.to_string(),
    })
}

fn parse_row(fields: &[&str], line_no: usize) -> Result<SweepPoint, DataError> {
    if fields.len() != 5 {
        return Err(DataError::MalformedTable {
            line: line_no,
            message: format!("expected 5 fields, got {}", fields.len()),
        });
    }

    let malformed = |what: &str, value: &str| DataError::MalformedTable {
        line: line_no,
        message: format!("invalid {} '{}'", what, value),
    };
    let parse_f64 = |name: &str, value: &str| -> Result<Option<f64>, DataError> {
        if value.is_empty() {
            return Ok(None);
        }
        value.parse().map(Some).map_err(|_| malformed(name, value))
    };

    let configured_period = fields[0]
        .parse()
        .map_err(|_| malformed("configured_period", fields[0]))?;
    let rtt_p90 = parse_f64("rtt_p90", fields[1])?.ok_or_else(|| malformed("rtt_p90", ""))?;

    Ok(SweepPoint {
        configured_period,
        rtt_p90,
        rtt_std: parse_f64("rtt_std", fields[2])?,
        request_period_cv: parse_f64("request_period_cv", fields[3])?,
        reply_period_cv: parse_f64("reply_period_cv", fields[4])?,
    })
}
