use crate::difficulty::DifficultyCategory;
use crate::player::builder::PlayerBuilder;
use crate::player::position::PositionTier;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const VETERAN_GAMES: u32 = 96;
pub const YOUNG_GAMES: u32 = 32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_name: String,
    pub team: String,
    pub position: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub years_experience: u32,
    #[serde(deserialize_with = "deserialize_colleges")]
    pub college: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_url: Option<String>,

    //draft
    #[serde(default)]
    pub draft_year: Option<i32>,
    #[serde(default)]
    pub draft_round: Option<u32>,
    #[serde(default)]
    pub undrafted: bool,

    //career
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub games_started: u32,

    //accolades
    #[serde(default)]
    pub pro_bowls: u32,
    #[serde(default)]
    pub all_pros: u32,
    #[serde(default)]
    pub awards: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_score: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStatus {
    Undrafted { year: Option<i32> },
    Drafted { round: u32, year: Option<i32> },
}

/// Identity of a player across sessions. Names repeat across rosters,
/// so the team is part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerKey {
    pub name: String,
    pub team: String,
}

impl PlayerRecord {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn key(&self) -> PlayerKey {
        PlayerKey {
            name: self.player_name.clone(),
            team: self.team.clone(),
        }
    }

    pub fn is_same_player(&self, other: &PlayerRecord) -> bool {
        self.player_name == other.player_name && self.team == other.team
    }

    /// A record that is not flagged undrafted but carries no round is
    /// treated as undrafted.
    pub fn draft_status(&self) -> DraftStatus {
        match (self.undrafted, self.draft_round) {
            (false, Some(round)) => DraftStatus::Drafted {
                round,
                year: self.draft_year,
            },
            _ => DraftStatus::Undrafted {
                year: self.draft_year,
            },
        }
    }

    pub fn draft_round(&self) -> Option<u32> {
        match self.draft_status() {
            DraftStatus::Drafted { round, .. } => Some(round),
            DraftStatus::Undrafted { .. } => None,
        }
    }

    pub fn is_first_round(&self) -> bool {
        self.draft_round() == Some(1)
    }

    pub fn position_tier(&self) -> PositionTier {
        PositionTier::from_position(&self.position)
    }

    pub fn has_accolades(&self) -> bool {
        self.pro_bowls > 0 || self.all_pros > 0 || !self.awards.is_empty()
    }

    pub fn is_veteran(&self) -> bool {
        self.games_played >= VETERAN_GAMES
    }

    pub fn is_young(&self) -> bool {
        self.games_played < YOUNG_GAMES
    }

    pub fn games_started_ratio(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }

        self.games_started as f64 / self.games_played as f64
    }

    pub fn difficulty_category(&self) -> Option<DifficultyCategory> {
        self.difficulty_score.map(DifficultyCategory::from_score)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.player_name.trim().is_empty() {
            return Err("player_name is empty".to_string());
        }

        if self.college.is_empty() {
            return Err(format!("{}: college is empty", self.player_name));
        }

        if self.games_started > self.games_played {
            return Err(format!(
                "{}: games_started ({}) exceeds games_played ({})",
                self.player_name, self.games_started, self.games_played
            ));
        }

        if !self.undrafted && self.draft_round == Some(0) {
            return Err(format!("{}: draft_round must be positive", self.player_name));
        }

        Ok(())
    }
}

impl Display for PlayerRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {})", self.player_name, self.position, self.team)
    }
}

impl Display for PlayerKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} [{}]", self.name, self.team)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CollegeField {
    Single(String),
    Many(Vec<String>),
}

fn deserialize_colleges<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let colleges = match CollegeField::deserialize(deserializer)? {
        CollegeField::Single(college) => vec![college],
        CollegeField::Many(colleges) => colleges,
    };

    Ok(colleges
        .into_iter()
        .map(|college| college.trim().to_string())
        .filter(|college| !college.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_status_without_round_is_undrafted() {
        let player = PlayerRecord::builder()
            .name("Nobody")
            .drafted(1, 2020)
            .build()
            .unwrap();
        assert_eq!(player.draft_round(), Some(1));

        let mut broken = player.clone();
        broken.draft_round = None;
        assert_eq!(broken.draft_status(), DraftStatus::Undrafted { year: Some(2020) });
    }

    #[test]
    fn test_games_started_ratio_without_games() {
        let player = PlayerRecord::builder().name("Rookie").build().unwrap();
        assert_eq!(player.games_played, 0);
        assert_eq!(player.games_started_ratio(), 0.0);
    }

    #[test]
    fn test_validate_rejects_more_starts_than_games() {
        let mut player = PlayerRecord::builder()
            .name("Starter")
            .games(10, 10)
            .build()
            .unwrap();
        assert!(player.validate().is_ok());

        player.games_started = 11;
        assert!(player.validate().is_err());
    }
}
