use crate::player::player::PlayerRecord;
use crate::player::position::PositionTier;

pub const FEATURE_COUNT: usize = 18;

pub type FeatureVector = [f64; FEATURE_COUNT];

pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Round 1",
    "Round 2",
    "Round 3+",
    "Undrafted",
    "QB/WR/RB",
    "TE",
    "OL",
    "Defense",
    "Pro Bowls",
    "All-Pros",
    "Awards",
    "Has Accolades",
    "Games Played",
    "Veteran (6+yrs)",
    "Young (<2yrs)",
    "Vet No Accolades",
    "Young 1st Round",
    "Start %",
];

/// Turns a player into the fixed-width vector the regression model is
/// trained on. Column order must stay in sync with `FEATURE_NAMES`.
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn extract(player: &PlayerRecord) -> FeatureVector {
        let round = player.draft_round();
        let tier = player.position_tier();
        let has_accolades = player.has_accolades();

        let veteran_without_accolades =
            player.is_veteran() && !has_accolades && !tier.is_skill();
        let young_first_round = player.is_young() && player.is_first_round();

        [
            // draft
            flag(round == Some(1)),
            flag(round == Some(2)),
            flag(matches!(round, Some(r) if r >= 3)),
            flag(round.is_none()),
            // position
            flag(tier == PositionTier::TopSkill),
            flag(tier == PositionTier::TightEnd),
            flag(tier == PositionTier::OffensiveLine),
            flag(tier == PositionTier::Defense),
            // accolades
            player.pro_bowls as f64,
            player.all_pros as f64,
            player.awards.len() as f64,
            flag(has_accolades),
            // career length
            player.games_played as f64,
            flag(player.is_veteran()),
            flag(player.is_young()),
            // interactions
            flag(veteran_without_accolades),
            flag(young_first_round),
            player.games_started_ratio(),
        ]
    }
}

#[inline]
fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}
