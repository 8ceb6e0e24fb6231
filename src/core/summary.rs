// Toolbox - core/summary.rs
//
// Per-level aggregation over parsed entries.
// Core layer: pure logic, no I/O.

use crate::core::model::{LevelCounts, LogEntry};

/// Count entries per level, in first-seen order.
pub fn count_by_level(entries: &[LogEntry]) -> LevelCounts {
    let mut counts = LevelCounts::new();
    for entry in entries {
        counts.record(&entry.level);
    }
    counts
}

/// Entries whose level equals `level`, compared after uppercasing `level`.
///
/// Returned in input order. Borrowed so the detail view never copies entries.
pub fn filter_by_level<'a>(entries: &'a [LogEntry], level: &str) -> Vec<&'a LogEntry> {
    let wanted = normalise_level(level);
    entries.iter().filter(|e| e.level == wanted).collect()
}

/// Canonical form of a user-supplied level name.
///
/// Uppercase only; surrounding whitespace is part of the name and will not
/// match any parsed level.
pub fn normalise_level(level: &str) -> String {
    level.to_uppercase()
}
