mod error;
mod loaders;
mod storage;

pub use error::*;
pub use loaders::*;
pub use storage::*;
