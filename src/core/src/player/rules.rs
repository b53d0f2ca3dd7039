use crate::difficulty::DifficultyCategory;
use crate::player::player::PlayerRecord;
use crate::player::position::PositionTier;

const ALL_PRO_CAP: u32 = 3;
const PRO_BOWL_CAP: u32 = 4;

pub struct RuleScorer;

impl RuleScorer {
    /// Hand-tuned recall score. Higher raw score means easier to guess;
    /// the result is always one of 1.0, 2.0, 3.0 or 4.0.
    pub fn score(player: &PlayerRecord) -> f64 {
        let raw = raw_score(player);

        Self::category_for(raw).value() as f64
    }

    pub fn category(player: &PlayerRecord) -> DifficultyCategory {
        Self::category_for(raw_score(player))
    }

    fn category_for(raw: f64) -> DifficultyCategory {
        match raw {
            s if s >= 3.0 => DifficultyCategory::LayUp,
            s if s >= 1.5 => DifficultyCategory::ShouldKnow,
            s if s >= 0.0 => DifficultyCategory::HeardOf,
            _ => DifficultyCategory::NoIdea,
        }
    }
}

pub fn raw_score(player: &PlayerRecord) -> f64 {
    determine_draft_adjustment(player)
        + determine_position_adjustment(player)
        + determine_honors_adjustment(player)
        + determine_career_adjustment(player)
}

/// First-rounders are the most recognisable, undrafted players slightly less so
fn determine_draft_adjustment(player: &PlayerRecord) -> f64 {
    match player.draft_round() {
        Some(1) => 2.0,
        Some(2) => 0.5,
        Some(_) => 0.0,
        None => -0.3,
    }
}

fn determine_position_adjustment(player: &PlayerRecord) -> f64 {
    match player.position_tier() {
        PositionTier::TopSkill => 1.0,
        PositionTier::TightEnd => 0.5,
        PositionTier::OffensiveLine => -1.0,
        PositionTier::Defense | PositionTier::Special => 0.0,
    }
}

/// All-pros count up to three, pro bowls up to four
fn determine_honors_adjustment(player: &PlayerRecord) -> f64 {
    let mut adjustment = 0.0;

    if !player.awards.is_empty() {
        adjustment += 1.5;
    }

    adjustment += 1.2 * player.all_pros.min(ALL_PRO_CAP) as f64;
    adjustment += 0.6 * player.pro_bowls.min(PRO_BOWL_CAP) as f64;

    adjustment
}

fn determine_career_adjustment(player: &PlayerRecord) -> f64 {
    let mut adjustment = 0.0;

    if player.is_veteran() {
        if player.has_accolades() {
            adjustment += 0.8;
        } else if !player.position_tier().is_skill() {
            adjustment -= 0.7;
        } else {
            adjustment += 0.2;
        }
    }

    // stacks with the draft bonus
    if player.is_young() && player.is_first_round() {
        adjustment += 1.2;
    }

    adjustment
}
