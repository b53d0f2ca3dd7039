use crate::difficulty::DifficultyCategory;
use crate::player::{FeatureExtractor, FeatureVector, PlayerRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user rating. Never mutated after it is created; the history of these
/// is the only thing the regression model learns from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    // snapshot of the player at rating time
    pub player: PlayerRecord,
    pub predicted_difficulty: f64,
    pub actual_difficulty: u8,
    pub features: FeatureVector,
    pub error: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackMatch {
    Exact,
    Close,
    Miss,
}

impl FeedbackRecord {
    pub fn new(player: &PlayerRecord, predicted_difficulty: f64, rating: DifficultyCategory) -> Self {
        let actual = rating.value() as f64;

        FeedbackRecord {
            player: player.clone(),
            predicted_difficulty,
            actual_difficulty: rating.value(),
            features: FeatureExtractor::extract(player),
            error: (actual - predicted_difficulty).abs(),
            recorded_at: Some(Utc::now()),
        }
    }

    pub fn actual(&self) -> Option<DifficultyCategory> {
        DifficultyCategory::from_value(self.actual_difficulty)
    }

    pub fn label(&self) -> f64 {
        self.actual_difficulty as f64
    }

    pub fn match_kind(&self) -> FeedbackMatch {
        match self.error {
            e if e < 0.5 => FeedbackMatch::Exact,
            e if e <= 1.0 => FeedbackMatch::Close,
            _ => FeedbackMatch::Miss,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.actual().is_none() {
            return Err(format!(
                "{}: rating {} is outside 1..=4",
                self.player.player_name, self.actual_difficulty
            ));
        }

        if !self.error.is_finite() || !self.predicted_difficulty.is_finite() {
            return Err(format!("{}: non-finite score", self.player.player_name));
        }

        if self.features.iter().any(|value| !value.is_finite()) {
            return Err(format!("{}: non-finite feature", self.player.player_name));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_captures_error_and_features() {
        let player = PlayerRecord::builder()
            .name("Edge Rusher")
            .position("DE")
            .drafted(1, 2019)
            .games(80, 70)
            .pro_bowls(2)
            .difficulty_score(3.0)
            .build()
            .unwrap();

        let record = FeedbackRecord::new(&player, 3.0, DifficultyCategory::NoIdea);

        assert_eq!(record.actual(), Some(DifficultyCategory::NoIdea));
        assert_eq!(record.error, 2.0);
        assert_eq!(record.features, FeatureExtractor::extract(&player));
        assert_eq!(record.match_kind(), FeedbackMatch::Miss);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_match_kinds() {
        let player = PlayerRecord::builder().name("Any").build().unwrap();

        assert_eq!(FeedbackRecord::new(&player, 2.0, DifficultyCategory::HeardOf).match_kind(), FeedbackMatch::Exact);
        assert_eq!(FeedbackRecord::new(&player, 2.0, DifficultyCategory::ShouldKnow).match_kind(), FeedbackMatch::Close);
        assert_eq!(FeedbackRecord::new(&player, 2.0, DifficultyCategory::LayUp).match_kind(), FeedbackMatch::Miss);
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        let player = PlayerRecord::builder().name("Any").build().unwrap();
        let mut record = FeedbackRecord::new(&player, 2.0, DifficultyCategory::HeardOf);
        record.actual_difficulty = 7;

        assert!(record.validate().is_err());
    }
}
