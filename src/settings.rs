use color_eyre::eyre::{WrapErr, eyre};
use ranking::RetrainPolicy;
use std::env;
use std::path::PathBuf;

const DEFAULT_PLAYERS_FILE: &str = "nfl_players_32teams_2024.json";
const DEFAULT_FEEDBACK_FILE: &str = "difficulty_feedback.json";
const DEFAULT_MODEL_FILE: &str = "difficulty_model.json";

/// Process level settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub players_file: PathBuf,
    pub feedback_file: PathBuf,
    pub model_file: PathBuf,
    pub seed: Option<u64>,
    pub retrain_policy: RetrainPolicy,
}

impl AppSettings {
    pub fn from_env() -> color_eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> color_eyre::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str, default: &str| PathBuf::from(lookup(key).unwrap_or_else(|| default.to_string()));

        let seed = match lookup("RANKER_SEED") {
            Some(value) => Some(
                value
                    .trim()
                    .parse::<u64>()
                    .wrap_err_with(|| format!("RANKER_SEED must be an unsigned integer, got '{}'", value))?,
            ),
            None => None,
        };

        let retrain_policy = match lookup("RETRAIN_POLICY") {
            Some(name) => RetrainPolicy::from_name(&name)
                .ok_or_else(|| eyre!("RETRAIN_POLICY must be 'always' or 'keep-better', got '{}'", name))?,
            None => RetrainPolicy::default(),
        };

        Ok(AppSettings {
            players_file: path("PLAYERS_FILE", DEFAULT_PLAYERS_FILE),
            feedback_file: path("FEEDBACK_FILE", DEFAULT_FEEDBACK_FILE),
            model_file: path("MODEL_FILE", DEFAULT_MODEL_FILE),
            seed,
            retrain_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> color_eyre::Result<AppSettings> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();

        AppSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings(&[]).unwrap();

        assert_eq!(settings.players_file, PathBuf::from("nfl_players_32teams_2024.json"));
        assert_eq!(settings.feedback_file, PathBuf::from("difficulty_feedback.json"));
        assert_eq!(settings.model_file, PathBuf::from("difficulty_model.json"));
        assert_eq!(settings.seed, None);
        assert_eq!(settings.retrain_policy, RetrainPolicy::AlwaysReplace);
    }

    #[test]
    fn test_overrides() {
        let settings = settings(&[
            ("PLAYERS_FILE", "/data/players.json"),
            ("RANKER_SEED", " 42 "),
            ("RETRAIN_POLICY", "keep-better"),
        ])
        .unwrap();

        assert_eq!(settings.players_file, PathBuf::from("/data/players.json"));
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.retrain_policy, RetrainPolicy::KeepBetter);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(settings(&[("RANKER_SEED", "abc")]).is_err());
        assert!(settings(&[("RETRAIN_POLICY", "never")]).is_err());
    }
}
