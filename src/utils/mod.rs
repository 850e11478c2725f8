//! General-purpose utility modules.

pub mod error;
pub mod log;
pub mod progress;

// Re-export commonly used items
pub use error::{DecodeStage, HuffError, Result};
pub use progress::{NoProgress, ProgressObserver};
