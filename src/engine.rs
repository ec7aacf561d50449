// src/engine.rs
//! Main execution logic: one scan worker per input file, full join, reduce.

use std::path::PathBuf;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::cli::ReportMode;
use crate::error::Result;
use crate::reduce;
use crate::scanner;
use crate::types::{FileScan, LogReport};

/// The report engine. Dispatches one worker per input file and merges the
/// per-file results into a single report.
pub struct Engine {
    mode: ReportMode,
}

impl Engine {
    #[must_use]
    pub fn new(mode: ReportMode) -> Self {
        Self { mode }
    }

    /// Scans every file in parallel, then reduces the per-file results.
    ///
    /// Collecting into `Vec<Result<_>>` is the join point: every worker runs
    /// to completion before any failure is observed, and the collection
    /// keeps file-submission order. A single failing file fails the whole
    /// report even when the others succeeded. An empty file list is a valid
    /// no-op yielding an empty report.
    ///
    /// # Errors
    /// Returns the first recorded per-file failure, if any.
    pub fn scan(&self, files: &[PathBuf]) -> Result<LogReport> {
        let marker = self.mode.marker();
        let results: Vec<Result<FileScan>> = files
            .par_iter()
            .map(|path| scanner::scan_file(path, marker))
            .collect();

        let mut scans = Vec::with_capacity(results.len());
        for result in results {
            scans.push(result?);
        }
        Ok(reduce::merge_scans(&scans))
    }
}
