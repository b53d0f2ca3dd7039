use crate::difficulty::DifficultyCategory;
use thiserror::Error;

/// What the user answered for the player on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserDecision {
    Rate(DifficultyCategory),
    Skip,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("please enter a number between 1 and 4 (got {0})")]
    OutOfRange(i64),
    #[error("please enter a valid number (1-4), 'skip', or 'quit' (got '{0}')")]
    NotANumber(String),
}

impl UserDecision {
    pub fn parse(input: &str) -> Result<UserDecision, DecisionError> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "quit" | "q" | "exit" => return Ok(UserDecision::Quit),
            "skip" | "s" => return Ok(UserDecision::Skip),
            _ => {}
        }

        let value: i64 = normalized
            .parse()
            .map_err(|_| DecisionError::NotANumber(normalized.clone()))?;

        u8::try_from(value)
            .ok()
            .and_then(DifficultyCategory::from_value)
            .map(UserDecision::Rate)
            .ok_or(DecisionError::OutOfRange(value))
    }
}
