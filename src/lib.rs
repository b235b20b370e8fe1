// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::optimized_path::OptimizedPathSelection;
pub use algorithms::PathSelector;
pub use error::{SelectionError, SessionError};
pub use models::{RoadSegment, Route, WeightVector};
