// src/scanner.rs
//! Per-file scan: marker filter plus line classification.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::classify;
use crate::error::{ReportError, Result};
use crate::types::{FileScan, HandlerStats};

/// Scans one log file: every line containing `marker` (case-sensitive) is
/// classified and counted. Runs inside a worker, so failures come back as
/// values, never panics.
///
/// # Errors
/// `FileNotFound` for a missing path, `Io` for other read failures, and the
/// classifier's errors for malformed marker-matching lines.
pub fn scan_file(path: &Path, marker: &str) -> Result<FileScan> {
    let file = File::open(path).map_err(|e| open_error(e, path))?;
    let reader = BufReader::new(file);

    let mut stats = HandlerStats::new();
    let mut matches = 0u64;
    for line in reader.lines() {
        let line = line.map_err(|source| ReportError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        if line.contains(marker) {
            classify::classify_line(&line, &mut stats)?;
            matches += 1;
        }
    }
    Ok(FileScan { stats, matches })
}

fn open_error(source: io::Error, path: &Path) -> ReportError {
    if source.kind() == io::ErrorKind::NotFound {
        ReportError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        ReportError::Io {
            source,
            path: path.to_path_buf(),
        }
    }
}
