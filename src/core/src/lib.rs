pub mod config;
pub mod decision;
pub mod difficulty;
pub mod feedback;
pub mod model;
pub mod player;
pub mod progress;
pub mod ranker;
pub mod sampler;

pub mod utils;

pub use config::*;
pub use decision::*;
pub use difficulty::*;
pub use feedback::{CategoryCounts, FeedbackHistory, FeedbackMatch, FeedbackRecord};
pub use model::{LinearModel, Predictor, PredictorDirection, RetrainPolicy, TrainingError, TrainingReport};
pub use player::{DraftStatus, FEATURE_COUNT, FEATURE_NAMES, FeatureExtractor, FeatureVector, PlayerBuilder, PlayerKey, PlayerRecord, PositionTier, RuleScorer};
pub use progress::*;
pub use ranker::{FeedbackOutcome, Ranker, RankerStorage, RetrainOutcome, RoutingPhase, SessionState};
pub use sampler::*;
