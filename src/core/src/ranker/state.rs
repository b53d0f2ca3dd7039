use crate::config::RankerConfig;
use crate::feedback::FeedbackHistory;
use crate::model::LinearModel;

/// Which scorer answers `current_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingPhase {
    RuleOnly,
    ModelActive,
}

/// Everything that changes while the user rates players.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub history: FeedbackHistory,
    pub model: Option<LinearModel>,
}

impl SessionState {
    pub fn new(history: FeedbackHistory, model: Option<LinearModel>) -> Self {
        SessionState { history, model }
    }

    /// The model only takes over once enough feedback exists, and never
    /// before one has been trained.
    pub fn phase(&self, config: &RankerConfig) -> RoutingPhase {
        if self.history.len() < config.model_min_feedback || self.model.is_none() {
            RoutingPhase::RuleOnly
        } else {
            RoutingPhase::ModelActive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::DifficultyCategory;
    use crate::feedback::FeedbackRecord;
    use crate::player::{FEATURE_COUNT, PlayerRecord};

    fn history_of(len: usize) -> FeedbackHistory {
        let records = (0..len)
            .map(|i| {
                let player = PlayerRecord::builder().name(&format!("p{}", i)).build().unwrap();
                FeedbackRecord::new(&player, 2.0, DifficultyCategory::HeardOf)
            })
            .collect();
        FeedbackHistory::from_records(records)
    }

    #[test]
    fn test_phase_needs_feedback_and_model() {
        let config = RankerConfig::default();
        let model = LinearModel::new([0.0; FEATURE_COUNT], 2.0, 10);

        assert_eq!(SessionState::new(history_of(14), Some(model.clone())).phase(&config), RoutingPhase::RuleOnly);
        assert_eq!(SessionState::new(history_of(15), None).phase(&config), RoutingPhase::RuleOnly);
        assert_eq!(SessionState::new(history_of(15), Some(model)).phase(&config), RoutingPhase::ModelActive);
    }
}
