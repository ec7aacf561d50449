use crate::error::Result;
use crate::types::LogReport;

/// Prints the report as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(report: &LogReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
