pub mod category;
pub mod clock;
pub mod types;
pub mod worklist;

pub use category::{classify, Category};
pub use types::*;
pub use worklist::{WorklistConfig, WorklistTier};
