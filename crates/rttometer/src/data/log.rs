//! Parsing of raw probe logs.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rttometer_core::Record;

use super::DataError;

const COMMENT_MARKER: char = '#';
const REQUIRED_FIELDS: usize = 2;

/// Load a raw probe log.
///
/// Each data line holds whitespace-separated integers:
/// `start_time reply_time [rtt]`, all in microseconds. Blank lines are
/// skipped, and `#` starts a comment that runs to the end of the line.
/// Tokens after the third are ignored.
///
/// # Example file content
/// ```text
/// # start reply rtt
/// 100 150 50
/// 200 260 60
/// 305 375 70
/// ```
///
/// # Errors
///
/// Returns `DataError` if the file cannot be read, or if any data line has
/// fewer than two tokens or a non-integer token. A bad line fails the whole
/// log; rows are never silently dropped.
pub fn parse_log(path: &Path) -> Result<Vec<Record>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_log_reader(BufReader::new(file), path)?;

    tracing::debug!(path = %path.display(), records = records.len(), "parsed probe log");
    Ok(records)
}

/// Parse a raw probe log from any buffered reader.
///
/// `origin` names the source in IO errors.
pub fn parse_log_reader<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<Record>, DataError> {
    let mut records = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|source| DataError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
        if let Some(record) = parse_line(&line, line_num + 1)? {
            records.push(record);
        }
    }

    Ok(records)
}

/// Parse one line; `Ok(None)` for blank and comment-only lines.
fn parse_line(line: &str, line_no: usize) -> Result<Option<Record>, DataError> {
    let content = match line.find(COMMENT_MARKER) {
        Some(i) => &line[..i],
        None => line,
    };

    let tokens: Vec<&str> = content.split_whitespace().take(3).collect();
    if tokens.is_empty() {
        return Ok(None);
    }
    if tokens.len() < REQUIRED_FIELDS {
        return Err(DataError::MissingField {
            line: line_no,
            expected: REQUIRED_FIELDS,
            found: tokens.len(),
        });
    }

    let start_time = parse_int(tokens[0], line_no)?;
    let reply_time = parse_int(tokens[1], line_no)?;
    let rtt = tokens
        .get(2)
        .map(|token| parse_int(token, line_no))
        .transpose()?;

    Ok(Some(Record::new(start_time, reply_time, rtt)))
}

fn parse_int(token: &str, line_no: usize) -> Result<i64, DataError> {
    token.parse().map_err(|_| DataError::InvalidValue {
        line: line_no,
        value: token.to_string(),
    })
}
