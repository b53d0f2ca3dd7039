use crate::model::RetrainPolicy;

/// Thresholds and weights of the ranker. Immutable for the lifetime of a session;
/// everything that changes while rating lives in `SessionState`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankerConfig {
    /// Feedback records needed before the model may replace the rules
    pub model_min_feedback: usize,
    /// Retrain whenever the feedback count is a positive multiple of this
    pub retrain_interval: usize,
    /// Below this many records the sampler balances actual rating categories
    pub balanced_sampling_until: usize,

    pub early_blend_weight: f64,
    pub late_blend_weight: f64,
    pub blend_weight_switch: usize,

    pub top_predictors: usize,
    pub recent_error_window: usize,
    pub progress_interval: usize,
    pub final_distribution_min_feedback: usize,

    pub retrain_policy: RetrainPolicy,
}

impl RankerConfig {
    pub fn with_retrain_policy(mut self, retrain_policy: RetrainPolicy) -> Self {
        self.retrain_policy = retrain_policy;
        self
    }

    /// Weight given to a fresh user rating when blending it into the stored score.
    /// `feedback_count` includes the rating being blended.
    pub fn blend_weight(&self, feedback_count: usize) -> f64 {
        if feedback_count < self.blend_weight_switch {
            self.early_blend_weight
        } else {
            self.late_blend_weight
        }
    }

    pub fn is_retrain_due(&self, feedback_count: usize) -> bool {
        feedback_count > 0 && feedback_count % self.retrain_interval == 0
    }

    pub fn is_progress_due(&self, feedback_count: usize) -> bool {
        feedback_count > 0 && feedback_count % self.progress_interval == 0
    }
}

impl Default for RankerConfig {
    fn default() -> Self {
        RankerConfig {
            model_min_feedback: 15,
            retrain_interval: 10,
            balanced_sampling_until: 20,
            early_blend_weight: 0.7,
            late_blend_weight: 0.5,
            blend_weight_switch: 30,
            top_predictors: 3,
            recent_error_window: 10,
            progress_interval: 20,
            final_distribution_min_feedback: 20,
            retrain_policy: RetrainPolicy::AlwaysReplace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrain_only_on_multiples() {
        let config = RankerConfig::default();

        assert!(!config.is_retrain_due(0));
        assert!(!config.is_retrain_due(9));
        assert!(config.is_retrain_due(10));
        assert!(!config.is_retrain_due(11));
        assert!(config.is_retrain_due(20));
    }

    #[test]
    fn test_blend_weight_switches_at_thirty() {
        let config = RankerConfig::default();

        assert_eq!(config.blend_weight(1), 0.7);
        assert_eq!(config.blend_weight(29), 0.7);
        assert_eq!(config.blend_weight(30), 0.5);
        assert_eq!(config.blend_weight(100), 0.5);
    }
}
