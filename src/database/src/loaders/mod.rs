mod feedback;
mod file;
mod model;
mod players;

pub use feedback::*;
pub use model::*;
pub use players::*;
