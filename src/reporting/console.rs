use std::fmt::Write as _;

use crate::types::{LevelCounts, LogReport, TOTAL_KEY};

const HEADNOTE: [&str; 6] = ["HANDLER", "DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

/// Renders the handlers table. Rows come out in the accumulator's
/// lexicographic order; the `total` row sorts last and is shown with an
/// empty name label.
#[must_use]
pub fn format_report(report: &LogReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total requests: {}", report.total_requests);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<25}{:<10}{:<10}{:<10}{:<10}{:<10}",
        HEADNOTE[0], HEADNOTE[1], HEADNOTE[2], HEADNOTE[3], HEADNOTE[4], HEADNOTE[5]
    );
    for (name, counts) in report.handlers.iter() {
        let label = if name == TOTAL_KEY { "" } else { name };
        let _ = writeln!(out, "{label:<25}{}", format_counts(counts));
    }
    out
}

fn format_counts(c: &LevelCounts) -> String {
    format!(
        "{:<10}{:<10}{:<10}{:<10}{:<10}",
        c.debug, c.info, c.warning, c.error, c.critical
    )
}

/// Prints the handlers table to stdout.
pub fn print_report(report: &LogReport) {
    print!("{}", format_report(report));
}
