use crate::feedback::FeedbackRecord;
use crate::model::TrainingReport;

/// Result of a retrain triggered by a feedback event.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrainOutcome {
    pub report: TrainingReport,
    /// False when the retrain policy kept the previous model
    pub replaced: bool,
}

/// Everything that happened while recording one rating.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackOutcome {
    pub record: FeedbackRecord,
    pub blended_score: f64,
    pub feedback_count: usize,
    pub retrain: Option<RetrainOutcome>,
}
