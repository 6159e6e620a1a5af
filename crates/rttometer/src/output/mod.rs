//! Output formatting for sweep results.
//!
//! - Terminal: human-readable tables with colors
//! - JSON: machine-readable serialization of any result type

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty, write_json_file};
pub use terminal::{format_rtt_summary, format_sweep_table};
