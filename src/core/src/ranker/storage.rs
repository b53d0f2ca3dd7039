use crate::feedback::FeedbackHistory;
use crate::model::LinearModel;
use crate::player::PlayerRecord;

/// Durable home of everything a session mutates. Loading happens before a
/// `Ranker` exists, so only the save side lives here.
pub trait RankerStorage {
    type Error: std::error::Error;

    fn save_players(&mut self, players: &[PlayerRecord]) -> Result<(), Self::Error>;

    fn save_feedback(&mut self, history: &FeedbackHistory) -> Result<(), Self::Error>;

    fn save_model(&mut self, model: &LinearModel) -> Result<(), Self::Error>;
}
