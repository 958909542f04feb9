//! Position repetition tracking.

use std::collections::HashMap;

/// Counts how often each canonical position has occurred.
///
/// Keys are [`Position::repetition_key`](crate::Position::repetition_key)
/// strings. The position a game starts from counts as its first occurrence.
#[derive(Debug, Clone)]
pub struct RepetitionTracker {
    counts: HashMap<String, u32>,
    limit: u32,
}

impl RepetitionTracker {
    /// Creates a tracker seeded with one occurrence of `initial_key`.
    pub fn new(initial_key: impl Into<String>, limit: u32) -> Self {
        let mut counts = HashMap::new();
        counts.insert(initial_key.into(), 1);
        RepetitionTracker { counts, limit }
    }

    /// Records one more occurrence of `key`. Returns true once the position
    /// has occurred `limit` times.
    pub fn record(&mut self, key: impl Into<String>) -> bool {
        let count = self.counts.entry(key.into()).or_insert(0);
        *count += 1;
        *count >= self.limit
    }

    /// Returns how many times `key` has occurred.
    pub fn count(&self, key: &str) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Returns the occurrence count that triggers a draw.
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_is_seeded() {
        let tracker = RepetitionTracker::new("start", 3);
        assert_eq!(tracker.count("start"), 1);
        assert_eq!(tracker.count("other"), 0);
        assert_eq!(tracker.limit(), 3);
    }

    #[test]
    fn third_occurrence_is_a_draw() {
        let mut tracker = RepetitionTracker::new("start", 3);
        assert!(!tracker.record("a"));
        assert!(!tracker.record("start"));
        assert!(!tracker.record("a"));
        assert!(tracker.record("start"));
        assert_eq!(tracker.count("start"), 3);
    }

    #[test]
    fn custom_limit() {
        let mut tracker = RepetitionTracker::new("start", 2);
        assert!(tracker.record("start"));
    }
}
