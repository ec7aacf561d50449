use serde::Serialize;
use std::collections::BTreeMap;

/// Reserved accumulator key holding the cross-handler sums.
pub const TOTAL_KEY: &str = "total";

/// Severity of a single log record — the five fixed Django levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Parses a level token case-insensitively.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// Per-handler counters, one fixed field per severity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    pub debug: u64,
    pub info: u64,
    pub warning: u64,
    pub error: u64,
    pub critical: u64,
}

impl LevelCounts {
    pub fn bump(&mut self, level: Level) {
        match level {
            Level::Debug => self.debug += 1,
            Level::Info => self.info += 1,
            Level::Warning => self.warning += 1,
            Level::Error => self.error += 1,
            Level::Critical => self.critical += 1,
        }
    }

    pub fn add(&mut self, other: &LevelCounts) {
        self.debug += other.debug;
        self.info += other.info;
        self.warning += other.warning;
        self.error += other.error;
        self.critical += other.critical;
    }

    #[must_use]
    pub fn sum(&self) -> u64 {
        self.debug + self.info + self.warning + self.error + self.critical
    }
}

/// Accumulated counts keyed by handler name, plus the reserved `total` row.
///
/// A `BTreeMap` keeps rows in render order: handler paths start with `/`,
/// which sorts before `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HandlerStats {
    counts: BTreeMap<String, LevelCounts>,
}

impl HandlerStats {
    /// Creates an accumulator with the `total` row seeded at zero.
    #[must_use]
    pub fn new() -> Self {
        let mut counts = BTreeMap::new();
        counts.insert(TOTAL_KEY.to_string(), LevelCounts::default());
        Self { counts }
    }

    /// Records one observation: bumps the handler row (created zeroed on
    /// first sight) and the `total` row.
    pub fn record(&mut self, handler: &str, level: Level) {
        self.counts
            .entry(handler.to_string())
            .or_default()
            .bump(level);
        self.counts
            .entry(TOTAL_KEY.to_string())
            .or_default()
            .bump(level);
    }

    /// Adds every row of `other` into `self`, level by level. A row missing
    /// on either side counts as zero.
    pub fn merge(&mut self, other: &HandlerStats) {
        for (name, counts) in &other.counts {
            self.counts.entry(name.clone()).or_default().add(counts);
        }
    }

    #[must_use]
    pub fn get(&self, handler: &str) -> Option<&LevelCounts> {
        self.counts.get(handler)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LevelCounts)> {
        self.counts.iter().map(|(name, c)| (name.as_str(), c))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Outcome of scanning a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScan {
    pub stats: HandlerStats,
    pub matches: u64,
}

/// Merged results across every scanned file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogReport {
    pub handlers: HandlerStats,
    pub total_requests: u64,
}
