use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logreport", version, about = "Analyzes Django log files")]
pub struct Cli {
    /// Path to log file or files
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub filepath: Vec<PathBuf>,

    /// Report mode
    #[arg(long, short, value_enum, default_value_t = ReportMode::Handlers)]
    pub report: ReportMode,

    /// Emit the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Supported report modes. Each mode owns the marker substring that selects
/// the log lines it aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportMode {
    Handlers,
}

impl ReportMode {
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Handlers => "django.request",
        }
    }
}
