// Toolbox - core/model.rs
//
// Core data model types for the log summariser. Pure data definitions with
// no I/O and no platform dependencies.

use serde::Serialize;

// =============================================================================
// Log Entry (output of line parsing)
// =============================================================================

/// A single parsed log line.
///
/// Only produced for lines with at least four whitespace-separated fields.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// First field of the line, kept verbatim.
    pub date: String,

    /// Second field of the line, kept verbatim.
    pub time: String,

    /// Third field, normalised to uppercase.
    pub level: String,

    /// Everything after the level, internal whitespace preserved.
    pub message: String,
}

// =============================================================================
// Level counts
// =============================================================================

/// Occurrence count per level, iterated in first-seen order.
///
/// Backed by a Vec with linear lookup; a log has a handful of levels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCounts {
    counts: Vec<(String, usize)>,
}

impl LevelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `level`.
    pub fn record(&mut self, level: &str) {
        match self.counts.iter_mut().find(|(l, _)| l == level) {
            Some((_, n)) => *n += 1,
            None => self.counts.push((level.to_string(), 1)),
        }
    }

    /// Count for `level`, or 0 if it was never seen.
    pub fn get(&self, level: &str) -> usize {
        self.counts
            .iter()
            .find(|(l, _)| l == level)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Number of distinct levels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(level, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(l, n)| (l.as_str(), *n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_first_seen_order() {
        let mut counts = LevelCounts::new();
        counts.record("WARNING");
        counts.record("ERROR");
        counts.record("WARNING");
        let order: Vec<_> = counts.iter().collect();
        assert_eq!(order, vec![("WARNING", 2), ("ERROR", 1)]);
    }

    #[test]
    fn test_get_unknown_level_is_zero() {
        let mut counts = LevelCounts::new();
        counts.record("INFO");
        assert_eq!(counts.get("INFO"), 1);
        assert_eq!(counts.get("DEBUG"), 0);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_empty_counts() {
        let counts = LevelCounts::new();
        assert!(counts.is_empty());
        assert_eq!(counts.len(), 0);
    }
}
