use crate::difficulty::DifficultyCategory;
use crate::feedback::FeedbackHistory;
use crate::player::PlayerRecord;
use itertools::Itertools;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Index into the player slice
    Next(usize),
    Exhausted,
}

/// Chooses which unrated player is shown next.
///
/// While the history is short the sampler fills the category the user has
/// answered least often, using each player's current predicted category to
/// find candidates. After that every unrated player is equally likely.
#[derive(Debug, Clone, Copy)]
pub struct ActiveSampler {
    balanced_until: usize,
}

impl ActiveSampler {
    pub fn new(balanced_until: usize) -> Self {
        ActiveSampler { balanced_until }
    }

    pub fn next<R, P>(
        &self,
        players: &[PlayerRecord],
        history: &FeedbackHistory,
        predict: P,
        rng: &mut R,
    ) -> Selection
    where
        R: Rng + ?Sized,
        P: Fn(&PlayerRecord) -> DifficultyCategory,
    {
        let rated = history.rated_keys();

        let unrated: Vec<usize> = players
            .iter()
            .enumerate()
            .filter(|(_, player)| !rated.contains(&player.key()))
            .map(|(idx, _)| idx)
            .collect();

        if unrated.is_empty() {
            return Selection::Exhausted;
        }

        if history.len() < self.balanced_until {
            if let Some(idx) = Self::balanced_pick(players, &unrated, history, &predict, rng) {
                return Selection::Next(idx);
            }
        }

        match unrated.choose(rng) {
            Some(&idx) => Selection::Next(idx),
            None => Selection::Exhausted,
        }
    }

    fn balanced_pick<R, P>(
        players: &[PlayerRecord],
        unrated: &[usize],
        history: &FeedbackHistory,
        predict: &P,
        rng: &mut R,
    ) -> Option<usize>
    where
        R: Rng + ?Sized,
        P: Fn(&PlayerRecord) -> DifficultyCategory,
    {
        let mut buckets: [Vec<usize>; 4] = Default::default();
        for &idx in unrated {
            buckets[predict(&players[idx]).index()].push(idx);
        }

        let counts = history.distribution();

        // stable sort keeps ties in ascending category order
        let category = DifficultyCategory::ALL
            .into_iter()
            .sorted_by_key(|category| counts[category.index()])
            .find(|category| !buckets[category.index()].is_empty())?;

        debug!(
            "balanced sampling from category {} ({} rated, {} candidates)",
            category.value(),
            counts[category.index()],
            buckets[category.index()].len()
        );

        buckets[category.index()].choose(rng).copied()
    }
}
