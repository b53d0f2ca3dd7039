use crate::error::StoreError;
use crate::loaders::file::{read_json, write_json};
use log::{debug, warn};
use ranking::{FeedbackHistory, FeedbackRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const FEEDBACK_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct FeedbackDocument {
    version: u32,
    records: Vec<FeedbackRecord>,
}

pub struct FeedbackLoader;

impl FeedbackLoader {
    /// Prior ratings, or an empty history when there are none. A corrupt file
    /// is reported and ignored so the session can still start.
    pub fn load(path: &Path) -> FeedbackHistory {
        match Self::try_load(path) {
            Ok(history) => history,
            Err(e) if e.is_not_found() => FeedbackHistory::new(),
            Err(e) => {
                warn!("could not load previous feedback, starting fresh: {}", e);
                FeedbackHistory::new()
            }
        }
    }

    /// Records that fail validation are dropped individually.
    pub fn try_load(path: &Path) -> Result<FeedbackHistory, StoreError> {
        let document: FeedbackDocument = read_json(path)?;

        if document.version != FEEDBACK_FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                path: path.to_path_buf(),
                version: document.version,
            });
        }

        let total = document.records.len();
        let records: Vec<FeedbackRecord> = document
            .records
            .into_iter()
            .filter(|record| match record.validate() {
                Ok(()) => true,
                Err(reason) => {
                    warn!("dropping feedback record: {}", reason);
                    false
                }
            })
            .collect();

        debug!("read {} of {} feedback records from {}", records.len(), total, path.display());

        Ok(FeedbackHistory::from_records(records))
    }

    pub fn save(path: &Path, history: &FeedbackHistory) -> Result<(), StoreError> {
        let document = FeedbackDocument {
            version: FEEDBACK_FORMAT_VERSION,
            records: history.records().to_vec(),
        };

        write_json(path, &document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ranking::{DifficultyCategory, PlayerRecord};
    use std::fs;
    use tempfile::TempDir;

    fn history() -> FeedbackHistory {
        let veteran = PlayerRecord::builder()
            .name("Veteran Guard")
            .team("KC")
            .position("OG")
            .college("Georgia")
            .drafted(3, 2014)
            .games(150, 140)
            .difficulty_score(1.0)
            .build()
            .unwrap();
        let rookie = PlayerRecord::builder()
            .name("Rookie Receiver")
            .team("DET")
            .position("WR")
            .college("Ohio State")
            .drafted(1, 2024)
            .games(17, 12)
            .difficulty_score(3.0)
            .build()
            .unwrap();

        FeedbackHistory::from_records(vec![
            FeedbackRecord::new(&veteran, 1.0, DifficultyCategory::HeardOf),
            FeedbackRecord::new(&rookie, 3.0, DifficultyCategory::LayUp),
        ])
    }

    #[test]
    fn test_save_then_load_reproduces_history() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("feedback.json");
        let history = history();

        FeedbackLoader::save(&path, &history).unwrap();

        assert_eq!(FeedbackLoader::try_load(&path).unwrap(), history);
    }

    #[test]
    fn test_missing_file_gives_empty_history() {
        let temp = TempDir::new().unwrap();

        assert!(FeedbackLoader::load(&temp.path().join("absent.json")).is_empty());
    }

    #[test]
    fn test_corrupt_file_gives_empty_history() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("feedback.json");

        fs::write(&path, "[[[").unwrap();
        assert!(FeedbackLoader::load(&path).is_empty());

        fs::write(&path, r#"{ "version": 9, "records": [] }"#).unwrap();
        assert!(matches!(
            FeedbackLoader::try_load(&path),
            Err(StoreError::UnsupportedVersion { version: 9, .. })
        ));
        assert!(FeedbackLoader::load(&path).is_empty());
    }

    #[test]
    fn test_invalid_records_are_dropped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("feedback.json");

        let mut history = history();
        FeedbackLoader::save(&path, &history).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        fs::write(&path, content.replacen("\"actual_difficulty\": 2", "\"actual_difficulty\": 9", 1)).unwrap();

        let loaded = FeedbackLoader::load(&path);
        let kept = history.records()[1].clone();
        history = FeedbackHistory::from_records(vec![kept]);

        assert_eq!(loaded, history);
    }
}
