pub mod history;
pub mod record;

pub use history::*;
pub use record::*;
