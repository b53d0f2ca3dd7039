pub mod outcome;
pub mod ranker;
pub mod state;
pub mod storage;

pub use outcome::*;
pub use ranker::*;
pub use state::*;
pub use storage::*;
