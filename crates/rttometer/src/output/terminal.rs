//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use rttometer_core::{RttSummary, SweepTable, RTT_PERCENTILE};

const UNAVAILABLE: &str = "n/a";

/// Format a summary table for human-readable terminal output.
///
/// One row per sweep point in configured-period order. Unavailable
/// statistics are shown as `n/a`.
pub fn format_sweep_table(table: &SweepTable) -> String {
    let mut output = String::new();

    let title = format!(
        "{} {}",
        "Sweep summary".bold(),
        format!("({} points)", table.len()).dimmed()
    );
    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&title));
    output.push_str(&format_box_separator());

    if table.is_empty() {
        output.push_str(&format_box_line(
            &"No sweep files found".yellow().to_string(),
        ));
        output.push_str(&format_box_bottom());
        return output;
    }

    let header = format!(
        "{:>10} {:>11} {:>10} {:>10} {:>10}",
        "period",
        format!("rtt_p{}", percentile_label(RTT_PERCENTILE)),
        "rtt_std",
        "req_cv",
        "rep_cv"
    );
    output.push_str(&format_box_line(&header.bold().to_string()));

    for p in table {
        let row = format!(
            "{:>10} {:>11} {:>10} {:>10} {:>10}",
            p.configured_period,
            format!("{:.1}", p.rtt_p90),
            format_opt(p.rtt_std, 1),
            format_opt(p.request_period_cv, 4),
            format_opt(p.reply_period_cv, 4),
        );
        output.push_str(&format_box_line(&row));
    }

    output.push_str(&format_box_bottom());
    output
}

/// Format the RTT summary of a single log.
pub fn format_rtt_summary(name: &str, summary: &RttSummary) -> String {
    let mut output = String::new();

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&name.bold().to_string()));
    output.push_str(&format_box_separator());

    output.push_str(&format_box_line(&format!("RTT values: {}", summary.count)));
    output.push_str(&format_box_line(&format!("Median:     {:.1} us", summary.median)));
    output.push_str(&format_box_line(&format!(
        "Std-dev:    {}",
        format_opt(summary.std, 1)
    )));
    output.push_str(&format_box_line(&format!("p90:        {:.1} us", summary.p90)));
    output.push_str(&format_box_line(&format!("p95:        {:.1} us", summary.p95)));

    let p99 = format!("p99:        {:.1} us", summary.p99);
    output.push_str(&format_box_line(&p99.yellow().to_string()));
    let max = format!("Max:        {:.1} us", summary.max);
    output.push_str(&format_box_line(&max.red().to_string()));

    output.push_str(&format_box_bottom());
    output
}

fn format_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => UNAVAILABLE.to_string(),
    }
}

fn percentile_label(p: f64) -> u32 {
    (p * 100.0).round() as u32
}

// Box drawing helpers

const BOX_WIDTH: usize = 60;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    let visible_len = visible_width(content);
    let padding = (BOX_WIDTH - 2).saturating_sub(visible_len);
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Character count of `s` ignoring ANSI escape sequences.
fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}
