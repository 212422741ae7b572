//! High score leaderboard record
//!
//! A bounded descending list of the best five scores, persisted through the
//! gateway in `persistence`.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// The persisted leaderboard. Invariant: `high_scores` is sorted descending
/// and holds at most [`MAX_HIGH_SCORES`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub high_scores: Vec<u32>,
}

impl ScoreRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self {
            high_scores: Vec::new(),
        }
    }

    /// Restore the invariant after deserializing external data - a
    /// hand-edited or stale file may be unsorted or overlong.
    pub fn normalize(&mut self) {
        self.high_scores.sort_unstable_by(|a, b| b.cmp(a));
        self.high_scores.truncate(MAX_HIGH_SCORES);
    }

    /// Insert a score, keeping the list descending and bounded
    pub fn insert(&mut self, score: u32) {
        self.high_scores.push(score);
        self.normalize();
    }

    /// The best score on record, if any
    pub fn top(&self) -> Option<u32> {
        self.high_scores.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.high_scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_descending_bounded() {
        let mut record = ScoreRecord::new();
        for score in [10, 50, 30, 20, 40, 5] {
            record.insert(score);
        }
        assert_eq!(record.high_scores, vec![50, 40, 30, 20, 10]);
        assert_eq!(record.top(), Some(50));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut record = ScoreRecord::new();
        record.insert(7);
        record.insert(7);
        assert_eq!(record.high_scores, vec![7, 7]);
    }

    #[test]
    fn test_normalize_repairs_external_data() {
        let mut record = ScoreRecord {
            high_scores: vec![1, 9, 3, 7, 5, 2, 8],
        };
        record.normalize();
        assert_eq!(record.high_scores, vec![9, 8, 7, 5, 3]);
    }

    #[test]
    fn test_json_shape() {
        let mut record = ScoreRecord::new();
        record.insert(12);
        record.insert(3);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"high_scores":[12,3]}"#);
    }
}
