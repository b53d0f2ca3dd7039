use crate::difficulty::DifficultyCategory;
use crate::feedback::{CategoryCounts, FeedbackHistory};
use crate::player::PlayerRecord;

/// One row of a per-category breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    pub category: DifficultyCategory,
    pub count: usize,
    pub percent: f64,
}

impl CategoryShare {
    fn from_counts(counts: CategoryCounts, total: usize) -> Vec<CategoryShare> {
        DifficultyCategory::ALL
            .iter()
            .map(|&category| {
                let count = counts[category.index()];
                CategoryShare {
                    category,
                    count,
                    percent: percent(count, total),
                }
            })
            .collect()
    }
}

/// How far the user has got and how they have been answering.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    pub rated: usize,
    pub total: usize,
    pub percent: f64,
    /// The user's own ratings per category
    pub ratings: Vec<CategoryShare>,
    /// Mean error over the most recent feedback, once enough exists
    pub recent_error: Option<f64>,
}

impl ProgressReport {
    pub fn build(history: &FeedbackHistory, total: usize, recent_window: usize) -> Self {
        let rated = history.len();

        let recent_error = if rated >= recent_window {
            history.recent_mean_error(recent_window)
        } else {
            None
        };

        ProgressReport {
            rated,
            total,
            percent: percent(rated, total),
            ratings: CategoryShare::from_counts(history.distribution(), rated),
            recent_error,
        }
    }
}

/// Share of players per category of their current difficulty score.
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyDistribution {
    pub players: usize,
    pub shares: Vec<CategoryShare>,
}

impl DifficultyDistribution {
    pub fn build(players: &[PlayerRecord]) -> Self {
        let mut counts = [0usize; 4];

        for category in players.iter().filter_map(PlayerRecord::difficulty_category) {
            counts[category.index()] += 1;
        }

        DifficultyDistribution {
            players: players.len(),
            shares: CategoryShare::from_counts(counts, players.len()),
        }
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    count as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackRecord;

    fn player(name: &str, score: f64) -> PlayerRecord {
        PlayerRecord::builder().name(name).difficulty_score(score).build().unwrap()
    }

    #[test]
    fn test_progress_without_recent_error_below_window() {
        let mut history = FeedbackHistory::new();
        for i in 0..9 {
            history.push(FeedbackRecord::new(&player(&i.to_string(), 2.0), 2.0, DifficultyCategory::LayUp));
        }

        let report = ProgressReport::build(&history, 90, 10);

        assert_eq!(report.rated, 9);
        assert_eq!(report.percent, 10.0);
        assert_eq!(report.ratings[3].count, 9);
        assert_eq!(report.ratings[3].percent, 100.0);
        assert_eq!(report.recent_error, None);

        history.push(FeedbackRecord::new(&player("10", 4.0), 4.0, DifficultyCategory::LayUp));
        let report = ProgressReport::build(&history, 90, 10);

        assert_eq!(report.recent_error, Some(1.8));
    }

    #[test]
    fn test_distribution_of_current_scores() {
        let players = vec![player("a", 1.0), player("b", 4.0), player("c", 4.0), player("d", 2.5)];

        let distribution = DifficultyDistribution::build(&players);

        assert_eq!(distribution.players, 4);
        let counts: Vec<usize> = distribution.shares.iter().map(|share| share.count).collect();
        assert_eq!(counts, vec![1, 1, 0, 2]);
        assert_eq!(distribution.shares[3].percent, 50.0);
    }

    #[test]
    fn test_empty_inputs() {
        let report = ProgressReport::build(&FeedbackHistory::new(), 0, 10);
        assert_eq!(report.percent, 0.0);

        let distribution = DifficultyDistribution::build(&[]);
        assert!(distribution.shares.iter().all(|share| share.percent == 0.0));
    }
}
