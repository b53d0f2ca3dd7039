use crate::config::RankerConfig;
use crate::difficulty::{DifficultyCategory, round_score};
use crate::feedback::{FeedbackHistory, FeedbackRecord};
use crate::model::{LinearModel, TrainingReport};
use crate::player::{PlayerRecord, RuleScorer};
use crate::progress::{DifficultyDistribution, ProgressReport};
use crate::ranker::outcome::{FeedbackOutcome, RetrainOutcome};
use crate::ranker::state::{RoutingPhase, SessionState};
use crate::ranker::storage::RankerStorage;
use crate::sampler::{ActiveSampler, Selection};
use crate::utils::TimeEstimation;
use log::{debug, error, info, warn};
use rand::Rng;

/// Drives one rating session: picks players, folds ratings into their scores,
/// retrains the model on schedule and keeps storage in sync.
pub struct Ranker<S: RankerStorage> {
    config: RankerConfig,
    players: Vec<PlayerRecord>,
    state: SessionState,
    sampler: ActiveSampler,
    storage: S,
}

impl<S: RankerStorage> Ranker<S> {
    /// Players without a score get the rule score. The player file is only
    /// rewritten when that changed something.
    pub fn new(players: Vec<PlayerRecord>, state: SessionState, config: RankerConfig, storage: S) -> Self {
        let sampler = ActiveSampler::new(config.balanced_sampling_until);

        let mut ranker = Ranker {
            config,
            players,
            state,
            sampler,
            storage,
        };

        let initialized = ranker.initialize_difficulty_scores();
        if initialized > 0 {
            info!("added initial difficulty scores to {} players", initialized);
            ranker.save_players();
        } else {
            info!("loaded {} players with existing difficulty scores", ranker.players.len());
        }

        ranker
    }

    fn initialize_difficulty_scores(&mut self) -> usize {
        let mut initialized = 0;

        for player in self.players.iter_mut().filter(|p| p.difficulty_score.is_none()) {
            player.difficulty_score = Some(RuleScorer::score(player));
            initialized += 1;
        }

        initialized
    }

    pub fn phase(&self) -> RoutingPhase {
        self.state.phase(&self.config)
    }

    pub fn current_score(&self, player: &PlayerRecord) -> f64 {
        match (self.phase(), &self.state.model) {
            (RoutingPhase::ModelActive, Some(model)) => model.score(player),
            _ => RuleScorer::score(player),
        }
    }

    pub fn next_player<R: Rng + ?Sized>(&self, rng: &mut R) -> Selection {
        self.sampler.next(
            &self.players,
            &self.state.history,
            |player| {
                player
                    .difficulty_category()
                    .unwrap_or_else(|| RuleScorer::category(player))
            },
            rng,
        )
    }

    /// Appends the rating, blends it into the player's stored score, retrains
    /// when due and saves. `None` if `index` does not name a player.
    pub fn record_feedback(&mut self, index: usize, rating: DifficultyCategory) -> Option<FeedbackOutcome> {
        let fallback = self.current_score(self.players.get(index)?);
        let player = self.players.get_mut(index)?;

        let predicted = player.difficulty_score.unwrap_or(fallback);
        let record = FeedbackRecord::new(player, predicted, rating);

        self.state.history.push(record.clone());
        let feedback_count = self.state.history.len();

        let weight = self.config.blend_weight(feedback_count);
        let blended_score = round_score(weight * record.label() + (1.0 - weight) * predicted);
        player.difficulty_score = Some(blended_score);

        debug!(
            "recorded {}: rating {}, predicted {}, blended {}",
            player, rating.value(), predicted, blended_score
        );

        let mut retrain = None;
        if self.config.is_retrain_due(feedback_count) {
            retrain = self.retrain();
            self.update_all_difficulty_scores();
        }

        self.save_players();
        self.save_feedback();
        if retrain.as_ref().is_some_and(|outcome| outcome.replaced) {
            self.save_model();
        }

        Some(FeedbackOutcome {
            record,
            blended_score,
            feedback_count,
            retrain,
        })
    }

    /// Fits a candidate on the whole history and lets the retrain policy decide
    /// whether it replaces the current model. Failures keep the current model.
    pub fn retrain(&mut self) -> Option<RetrainOutcome> {
        let (fitted, estimated) = TimeEstimation::estimate(|| LinearModel::fit(&self.state.history));

        let candidate = match fitted {
            Ok(candidate) => candidate,
            Err(e) => {
                error!("training failed, keeping previous model: {}", e);
                return None;
            }
        };

        let report = candidate.evaluate(&self.state.history, self.config.top_predictors);
        let replaced = self.config.retrain_policy.should_replace(
            self.state.model.as_ref(),
            &report,
            &self.state.history,
        );

        Self::log_report(&report, estimated);

        if replaced {
            self.state.model = Some(candidate);
        } else {
            warn!(
                "candidate model rejected (within one: {:.1}%), keeping previous model",
                report.within_one_accuracy * 100.0
            );
        }

        Some(RetrainOutcome { report, replaced })
    }

    fn log_report(report: &TrainingReport, estimated: u128) {
        info!(
            "model trained on {} ratings: exact {:.1}%, within one {:.1}%, mean error {:.2} ({} ms)",
            report.samples,
            report.exact_accuracy * 100.0,
            report.within_one_accuracy * 100.0,
            report.mean_error,
            estimated
        );
    }

    /// Overwrites every player's score with the scorer of the current phase.
    pub fn update_all_difficulty_scores(&mut self) {
        let scores: Vec<f64> = self.players.iter().map(|player| self.current_score(player)).collect();

        for (player, score) in self.players.iter_mut().zip(scores) {
            player.difficulty_score = Some(score);
        }

        info!("updated difficulty scores for all {} players", self.players.len());
    }

    pub fn progress(&self) -> ProgressReport {
        ProgressReport::build(&self.state.history, self.players.len(), self.config.recent_error_window)
    }

    pub fn is_progress_due(&self) -> bool {
        self.config.is_progress_due(self.state.history.len())
    }

    /// Distribution of current scores, once enough ratings exist for it to mean anything.
    pub fn final_distribution(&self) -> Option<DifficultyDistribution> {
        if self.state.history.len() < self.config.final_distribution_min_feedback {
            return None;
        }

        Some(DifficultyDistribution::build(&self.players))
    }

    /// Best-effort save of players, feedback and, if one exists, the model.
    pub fn persist_all(&mut self) {
        self.save_players();
        self.save_feedback();

        if self.state.model.is_some() {
            self.save_model();
        }
    }

    fn save_players(&mut self) {
        if let Err(e) = self.storage.save_players(&self.players) {
            error!("failed to save players: {}", e);
        }
    }

    fn save_feedback(&mut self) {
        if let Err(e) = self.storage.save_feedback(&self.state.history) {
            error!("failed to save feedback: {}", e);
        }
    }

    fn save_model(&mut self) {
        if let Some(model) = &self.state.model {
            if let Err(e) = self.storage.save_model(model) {
                error!("failed to save model: {}", e);
            }
        }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&PlayerRecord> {
        self.players.get(index)
    }

    pub fn history(&self) -> &FeedbackHistory {
        &self.state.history
    }

    pub fn model(&self) -> Option<&LinearModel> {
        self.state.model.as_ref()
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
