// Models module - exports all model types

mod road;
mod route;
mod weights;

// Re-export model types
pub use self::road::{RoadSegment, MAX_RATING};
pub use self::route::Route;
pub use self::weights::{WeightVector, WEIGHT_SUM_TOLERANCE};

// Common type aliases for improved code readability
pub type Kilometers = f64;
pub type Rating = f64;
pub type Score = f64;
