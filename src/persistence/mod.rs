//! Score persistence gateway
//!
//! The only fallible boundary the core crosses. Loads are tolerant - a
//! missing or corrupt file yields an empty record, reported once through the
//! log, never an error. Saves return `Result` so the caller can retry a
//! bounded number of times; a failed save must never abort an episode.

use std::fs;
use std::path::PathBuf;

use crate::highscores::ScoreRecord;

/// Persistence failure - I/O or malformed JSON
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("score file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// External collaborator contract for the bounded high-score list
pub trait ScoreStore {
    /// Load the record, substituting an empty one on any failure
    fn load_scores(&self) -> ScoreRecord;

    /// Insert a score and write the record back
    fn save_score(&mut self, value: u32) -> Result<(), PersistError>;
}

/// JSON-file backed store: `{ "high_scores": [int, ...] }`
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_record(&self) -> Result<ScoreRecord, PersistError> {
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl ScoreStore for JsonScoreStore {
    fn load_scores(&self) -> ScoreRecord {
        match self.read_record() {
            Ok(mut record) => {
                record.normalize();
                record
            }
            Err(PersistError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no score file at {}, starting fresh", self.path.display());
                ScoreRecord::new()
            }
            Err(err) => {
                log::warn!(
                    "failed to load scores from {}: {err}",
                    self.path.display()
                );
                ScoreRecord::new()
            }
        }
    }

    fn save_score(&mut self, value: u32) -> Result<(), PersistError> {
        let mut record = self.load_scores();
        record.insert(value);
        let json = serde_json::to_string(&record)?;
        fs::write(&self.path, json)?;
        log::info!("saved score {value} ({} entries)", record.high_scores.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonScoreStore {
        JsonScoreStore::new(dir.path().join("scores.json"))
    }

    #[test]
    fn test_missing_file_is_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load_scores().is_empty());
    }

    #[test]
    fn test_corrupt_file_is_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "{not json").unwrap();
        let store = JsonScoreStore::new(path);
        assert!(store.load_scores().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.save_score(42).unwrap();
        let record = store.load_scores();
        assert_eq!(record.high_scores, vec![42]);
    }

    #[test]
    fn test_sequential_saves_keep_top_five_descending() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        for score in [10, 50, 30, 20, 40, 5] {
            store.save_score(score).unwrap();
        }
        assert_eq!(store.load_scores().high_scores, vec![50, 40, 30, 20, 10]);
    }

    #[test]
    fn test_load_normalizes_hand_edited_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, r#"{"high_scores":[3,99,1,7,5,2,8]}"#).unwrap();
        let store = JsonScoreStore::new(path);
        assert_eq!(store.load_scores().high_scores, vec![99, 8, 7, 5, 3]);
    }

    #[test]
    fn test_save_to_unwritable_path_errors() {
        let mut store = JsonScoreStore::new("/nonexistent-dir/scores.json");
        assert!(store.save_score(1).is_err());
    }
}
