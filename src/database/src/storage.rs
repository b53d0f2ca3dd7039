use crate::error::StoreError;
use crate::loaders::{FeedbackLoader, ModelLoader, PlayerLoader};
use ranking::{FeedbackHistory, LinearModel, PlayerRecord, RankerStorage};
use std::path::PathBuf;

/// JSON files backing a ranking session.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    pub players_path: PathBuf,
    pub feedback_path: PathBuf,
    pub model_path: PathBuf,
}

impl JsonStorage {
    pub fn new(players_path: impl Into<PathBuf>, feedback_path: impl Into<PathBuf>, model_path: impl Into<PathBuf>) -> Self {
        JsonStorage {
            players_path: players_path.into(),
            feedback_path: feedback_path.into(),
            model_path: model_path.into(),
        }
    }

    pub fn load_players(&self) -> Result<Vec<PlayerRecord>, StoreError> {
        PlayerLoader::load(&self.players_path)
    }

    pub fn load_feedback(&self) -> FeedbackHistory {
        FeedbackLoader::load(&self.feedback_path)
    }

    pub fn load_model(&self) -> Option<LinearModel> {
        ModelLoader::load(&self.model_path)
    }
}

impl RankerStorage for JsonStorage {
    type Error = StoreError;

    fn save_players(&mut self, players: &[PlayerRecord]) -> Result<(), StoreError> {
        PlayerLoader::save(&self.players_path, players)
    }

    fn save_feedback(&mut self, history: &FeedbackHistory) -> Result<(), StoreError> {
        FeedbackLoader::save(&self.feedback_path, history)
    }

    fn save_model(&mut self, model: &LinearModel) -> Result<(), StoreError> {
        ModelLoader::save(&self.model_path, model)
    }
}
