use crate::difficulty::DifficultyCategory;
use crate::feedback::record::FeedbackRecord;
use crate::player::{FeatureVector, PlayerKey, PlayerRecord};
use std::collections::HashSet;

/// Ratings per category, indexed by `DifficultyCategory::index`.
pub type CategoryCounts = [usize; 4];

/// Append-only, ordered collection of feedback records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackHistory {
    records: Vec<FeedbackRecord>,
}

impl FeedbackHistory {
    pub fn new() -> Self {
        FeedbackHistory {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<FeedbackRecord>) -> Self {
        FeedbackHistory { records }
    }

    pub fn push(&mut self, record: FeedbackRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeedbackRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&FeedbackRecord> {
        self.records.last()
    }

    pub fn rated_keys(&self) -> HashSet<PlayerKey> {
        self.records.iter().map(|record| record.player.key()).collect()
    }

    pub fn is_rated(&self, player: &PlayerRecord) -> bool {
        self.records
            .iter()
            .any(|record| record.player.is_same_player(player))
    }

    /// How many times the user answered each category.
    pub fn distribution(&self) -> CategoryCounts {
        let mut counts = [0usize; 4];

        for category in self.records.iter().filter_map(FeedbackRecord::actual) {
            counts[category.index()] += 1;
        }

        counts
    }

    pub fn count_for(&self, category: DifficultyCategory) -> usize {
        self.distribution()[category.index()]
    }

    pub fn mean_error(&self) -> Option<f64> {
        mean(self.records.iter().map(|record| record.error))
    }

    pub fn recent_mean_error(&self, window: usize) -> Option<f64> {
        let skip = self.records.len().saturating_sub(window);

        mean(self.records.iter().skip(skip).map(|record| record.error))
    }

    /// Feature rows and labels in recording order.
    pub fn training_rows(&self) -> (Vec<FeatureVector>, Vec<f64>) {
        self.records
            .iter()
            .map(|record| (record.features, record.label()))
            .unzip()
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
