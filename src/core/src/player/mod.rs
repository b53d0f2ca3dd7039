pub mod builder;
pub mod features;
pub mod player;
pub mod position;
pub mod rules;

pub use builder::*;
pub use features::*;
pub use player::*;
pub use position::*;
pub use rules::*;
