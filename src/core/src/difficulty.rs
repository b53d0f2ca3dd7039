use std::fmt::{Display, Formatter, Result};

pub const MIN_DIFFICULTY: f64 = 1.0;
pub const MAX_DIFFICULTY: f64 = 4.0;

/// How hard it is for the user to name a player's college.
/// Higher is easier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DifficultyCategory {
    NoIdea = 1,
    HeardOf = 2,
    ShouldKnow = 3,
    LayUp = 4,
}

impl DifficultyCategory {
    pub const ALL: [DifficultyCategory; 4] = [
        DifficultyCategory::NoIdea,
        DifficultyCategory::HeardOf,
        DifficultyCategory::ShouldKnow,
        DifficultyCategory::LayUp,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn from_value(value: u8) -> Option<DifficultyCategory> {
        match value {
            1 => Some(DifficultyCategory::NoIdea),
            2 => Some(DifficultyCategory::HeardOf),
            3 => Some(DifficultyCategory::ShouldKnow),
            4 => Some(DifficultyCategory::LayUp),
            _ => None,
        }
    }

    /// Rounds half to even, then clamps into the 1..=4 range.
    pub fn from_score(score: f64) -> DifficultyCategory {
        let rounded = round_score(score).clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);

        match rounded as u8 {
            1 => DifficultyCategory::NoIdea,
            2 => DifficultyCategory::HeardOf,
            3 => DifficultyCategory::ShouldKnow,
            _ => DifficultyCategory::LayUp,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DifficultyCategory::NoIdea => "No idea who this is",
            DifficultyCategory::HeardOf => "Heard of them but hard to guess",
            DifficultyCategory::ShouldKnow => "Should be able to guess",
            DifficultyCategory::LayUp => "Lay up, super easy",
        }
    }
}

impl Display for DifficultyCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} - {}", self.value(), self.label())
    }
}

/// Scores are rounded half to even everywhere, so 2.5 becomes 2 and 3.5 becomes 4.
#[inline]
pub fn round_score(score: f64) -> f64 {
    score.round_ties_even()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_score_rounds_and_clamps() {
        assert_eq!(DifficultyCategory::from_score(-3.0), DifficultyCategory::NoIdea);
        assert_eq!(DifficultyCategory::from_score(1.49), DifficultyCategory::NoIdea);
        assert_eq!(DifficultyCategory::from_score(2.5), DifficultyCategory::HeardOf);
        assert_eq!(DifficultyCategory::from_score(2.51), DifficultyCategory::ShouldKnow);
        assert_eq!(DifficultyCategory::from_score(3.5), DifficultyCategory::LayUp);
        assert_eq!(DifficultyCategory::from_score(9.0), DifficultyCategory::LayUp);
    }

    #[test]
    fn test_values_round_trip() {
        for category in DifficultyCategory::ALL {
            assert_eq!(DifficultyCategory::from_value(category.value()), Some(category));
            assert_eq!(DifficultyCategory::ALL[category.index()], category);
        }
        assert_eq!(DifficultyCategory::from_value(0), None);
        assert_eq!(DifficultyCategory::from_value(5), None);
    }
}
