pub mod policy;
pub mod regression;
pub mod report;

pub use policy::*;
pub use regression::*;
pub use report::*;
