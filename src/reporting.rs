//! Report rendering: console table and JSON.

mod console;
mod json;

pub use console::{format_report, print_report};
pub use json::print_json;
