use crate::error::StoreError;
use crate::loaders::file::{read_json, write_json};
use log::debug;
use ranking::PlayerRecord;
use std::path::Path;

pub struct PlayerLoader;

impl PlayerLoader {
    /// Loads the roster. A missing, unparsable or inconsistent file is an error;
    /// the session cannot start without players.
    pub fn load(path: &Path) -> Result<Vec<PlayerRecord>, StoreError> {
        let players: Vec<PlayerRecord> = read_json(path)?;

        for (idx, player) in players.iter().enumerate() {
            player
                .validate()
                .map_err(|reason| StoreError::invalid(path, format!("player #{}: {}", idx, reason)))?;
        }

        debug!("read {} players from {}", players.len(), path.display());

        Ok(players)
    }

    pub fn save(path: &Path, players: &[PlayerRecord]) -> Result<(), StoreError> {
        write_json(path, players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const ROSTER: &str = r#"[
        {
            "player_name": "Josh Allen",
            "team": "BUF",
            "position": "QB",
            "age": 28,
            "years_experience": 7,
            "college": "Wyoming",
            "player_url": "https://example.com/players/A/AlleJo02.htm",
            "draft_year": 2018,
            "draft_round": 1,
            "undrafted": false,
            "games_played": 110,
            "games_started": 108,
            "pro_bowls": 2,
            "all_pros": 1,
            "awards": ["MVP"]
        },
        {
            "player_name": "Journeyman",
            "team": "FA",
            "position": "OT",
            "age": null,
            "years_experience": 3,
            "college": ["Iowa Western CC", " Iowa "],
            "draft_year": 2021,
            "draft_round": null,
            "undrafted": true,
            "games_played": 20,
            "games_started": 4,
            "pro_bowls": 0,
            "all_pros": 0,
            "awards": [],
            "difficulty_score": 1.0
        }
    ]"#;

    #[test]
    fn test_load_accepts_single_and_multiple_colleges() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("players.json");
        fs::write(&path, ROSTER).unwrap();

        let players = PlayerLoader::load(&path).unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].college, vec!["Wyoming".to_string()]);
        assert_eq!(players[0].difficulty_score, None);
        assert_eq!(players[1].college, vec!["Iowa Western CC".to_string(), "Iowa".to_string()]);
        assert_eq!(players[1].age, None);
        assert_eq!(players[1].draft_round(), None);
        assert_eq!(players[1].difficulty_score, Some(1.0));
    }

    #[test]
    fn test_save_then_load_keeps_every_scoring_field() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("players.json");
        fs::write(&path, ROSTER).unwrap();

        let mut players = PlayerLoader::load(&path).unwrap();
        players[0].difficulty_score = Some(3.0);
        players[1].difficulty_score = Some(0.1 + 0.2);

        PlayerLoader::save(&path, &players).unwrap();
        let reloaded = PlayerLoader::load(&path).unwrap();

        assert_eq!(reloaded, players);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();

        let result = PlayerLoader::load(&temp.path().join("nope.json"));

        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_malformed_files_are_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("players.json");

        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(PlayerLoader::load(&path), Err(StoreError::Parse { .. })));

        let inconsistent = ROSTER.replace("\"games_started\": 108", "\"games_started\": 200");
        fs::write(&path, inconsistent).unwrap();
        assert!(matches!(PlayerLoader::load(&path), Err(StoreError::Invalid { .. })));
    }
}
