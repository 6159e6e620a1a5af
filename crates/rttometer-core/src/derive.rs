//! Per-record derivation of sequence indices and inter-arrival periods.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::PeriodOverflow;
use crate::types::{DerivedRecord, Record};

/// Derive sequence indices and request/reply periods for an ordered log.
///
/// The output has the same length and order as `records`. The first record
/// gets `None` for both periods; every later record gets the exact signed
/// difference against its predecessor. Out-of-order timestamps produce
/// negative periods and are kept as such.
///
/// # Errors
///
/// Returns `PeriodOverflow` if a difference does not fit in an `i64`.
pub fn derive_records(records: &[Record]) -> Result<Vec<DerivedRecord>, PeriodOverflow> {
    let mut derived = Vec::with_capacity(records.len());
    let mut prev: Option<&Record> = None;

    for (i, record) in records.iter().enumerate() {
        let sequence_index = i + 1;
        let (request_period, reply_period) = match prev {
            Some(p) => {
                let request = record.start_time.checked_sub(p.start_time).ok_or(
                    PeriodOverflow {
                        sequence_index,
                        period: "request_period",
                    },
                )?;
                let reply = record.reply_time.checked_sub(p.reply_time).ok_or(
                    PeriodOverflow {
                        sequence_index,
                        period: "reply_period",
                    },
                )?;
                (Some(request), Some(reply))
            }
            None => (None, None),
        };

        derived.push(DerivedRecord {
            record: *record,
            sequence_index,
            request_period,
            reply_period,
        });
        prev = Some(record);
    }

    Ok(derived)
}
