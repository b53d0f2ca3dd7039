use crate::feedback::FeedbackHistory;
use crate::model::regression::LinearModel;
use crate::model::report::TrainingReport;

/// Decides whether a freshly fitted model replaces the one in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetrainPolicy {
    /// Every retrain wins, even if its diagnostics are worse.
    #[default]
    AlwaysReplace,
    /// Keep the current model unless the candidate is at least as accurate
    /// (within one category) over the full history.
    KeepBetter,
}

impl RetrainPolicy {
    pub fn from_name(name: &str) -> Option<RetrainPolicy> {
        match name.trim().to_lowercase().as_str() {
            "always" | "always-replace" => Some(RetrainPolicy::AlwaysReplace),
            "keep-better" | "keep_better" => Some(RetrainPolicy::KeepBetter),
            _ => None,
        }
    }

    pub fn should_replace(
        &self,
        current: Option<&LinearModel>,
        candidate: &TrainingReport,
        history: &FeedbackHistory,
    ) -> bool {
        match (self, current) {
            (RetrainPolicy::AlwaysReplace, _) | (_, None) => true,
            (RetrainPolicy::KeepBetter, Some(current)) => {
                let baseline = current.evaluate(history, 0);
                candidate.within_one_accuracy >= baseline.within_one_accuracy
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::DifficultyCategory;
    use crate::feedback::FeedbackRecord;
    use crate::player::{FEATURE_COUNT, PlayerRecord};

    fn report(within_one_accuracy: f64) -> TrainingReport {
        TrainingReport {
            samples: 0,
            exact_accuracy: 0.0,
            within_one_accuracy,
            mean_error: 0.0,
            top_predictors: Vec::new(),
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(RetrainPolicy::from_name("always"), Some(RetrainPolicy::AlwaysReplace));
        assert_eq!(RetrainPolicy::from_name(" Keep-Better "), Some(RetrainPolicy::KeepBetter));
        assert_eq!(RetrainPolicy::from_name("sometimes"), None);
    }

    #[test]
    fn test_always_replace_ignores_diagnostics() {
        let current = LinearModel::new([0.0; FEATURE_COUNT], 2.0, 10);
        let history = FeedbackHistory::new();

        assert!(RetrainPolicy::AlwaysReplace.should_replace(Some(&current), &report(0.0), &history));
    }

    #[test]
    fn test_keep_better_without_current_model_accepts() {
        assert!(RetrainPolicy::KeepBetter.should_replace(None, &report(0.0), &FeedbackHistory::new()));
    }

    #[test]
    fn test_keep_better_keeps_more_accurate_current_model() {
        let player = PlayerRecord::builder().name("Backup").build().unwrap();
        let history = FeedbackHistory::from_records(vec![
            FeedbackRecord::new(&player, 2.0, DifficultyCategory::HeardOf);
            4
        ]);
        // predicts 2.0 for everyone, which is exactly right
        let current = LinearModel::new([0.0; FEATURE_COUNT], 2.0, 4);

        assert!(!RetrainPolicy::KeepBetter.should_replace(Some(&current), &report(0.5), &history));
        assert!(RetrainPolicy::KeepBetter.should_replace(Some(&current), &report(1.0), &history));
    }
}
