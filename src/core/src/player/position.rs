const TOP_SKILL_POSITIONS: [&str; 3] = ["QB", "WR", "RB"];
const TIGHT_END_POSITIONS: [&str; 1] = ["TE"];
const OFFENSIVE_LINE_POSITIONS: [&str; 10] = ["OL", "OT", "OG", "C", "T", "G", "LT", "RT", "LG", "RG"];
const DEFENSE_POSITIONS: [&str; 14] = [
    "DL", "DE", "DT", "NT", "EDGE", "LB", "ILB", "OLB", "MLB", "CB", "S", "FS", "SS", "DB",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionTier {
    TopSkill,
    TightEnd,
    OffensiveLine,
    Defense,
    // kickers, punters, long snappers
    Special,
}

impl PositionTier {
    pub fn from_position(position: &str) -> Self {
        let position = position.trim().to_uppercase();
        let position = position.as_str();

        if TOP_SKILL_POSITIONS.contains(&position) {
            PositionTier::TopSkill
        } else if TIGHT_END_POSITIONS.contains(&position) {
            PositionTier::TightEnd
        } else if OFFENSIVE_LINE_POSITIONS.contains(&position) {
            PositionTier::OffensiveLine
        } else if DEFENSE_POSITIONS.contains(&position) {
            PositionTier::Defense
        } else {
            PositionTier::Special
        }
    }

    /// Skill positions are the ball-handling ones, tight ends included.
    pub fn is_skill(&self) -> bool {
        matches!(self, PositionTier::TopSkill | PositionTier::TightEnd)
    }
}
