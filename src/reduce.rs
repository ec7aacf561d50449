// src/reduce.rs
//! Reduction of per-file scans into one merged report.

use crate::types::{FileScan, HandlerStats, LogReport};

/// Merges per-file scans: level-by-level addition per handler key over the
/// union of key sets (a key absent from some file counts as zero there), and
/// a summed match count. The merge is commutative and associative, so worker
/// completion order never shows in the result.
#[must_use]
pub fn merge_scans(scans: &[FileScan]) -> LogReport {
    let mut handlers = HandlerStats::default();
    let mut total_requests = 0u64;
    for scan in scans {
        handlers.merge(&scan.stats);
        total_requests += scan.matches;
    }
    LogReport {
        handlers,
        total_requests,
    }
}
