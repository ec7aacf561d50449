// src/classify.rs
//! Line classification for the handlers report.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ReportError, Result};
use crate::types::{HandlerStats, Level};

// Greedy on purpose: the handler is everything between the first and the
// last `/` on the line, so nested paths like `/api/v1/reviews/` come out whole.
static HANDLER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/.*/").unwrap_or_else(|_| panic!("Invalid Regex")));

static LEVEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)debug|info|warning|error|critical")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Classifies one marker-matching line into `stats`, bumping both the
/// handler row and the `total` row.
///
/// A line that passed the marker filter but carries no handler path or no
/// level token is malformed input; it surfaces as an error rather than being
/// silently dropped.
///
/// # Errors
/// Returns `NoHandler` / `NoLevel` when the respective pattern is absent.
pub fn classify_line(line: &str, stats: &mut HandlerStats) -> Result<()> {
    let handler = HANDLER_RE.find(line).ok_or_else(|| ReportError::NoHandler {
        line: line.trim_end().to_string(),
    })?;
    let level = LEVEL_RE
        .find(line)
        .and_then(|m| Level::parse(m.as_str()))
        .ok_or_else(|| ReportError::NoLevel {
            line: line.trim_end().to_string(),
        })?;

    stats.record(handler.as_str(), level);
    Ok(())
}
