// Error types for route selection and the input session

use thiserror::Error;

/// Failures raised by the selection core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    /// A road segment's numeric fields are out of range
    #[error(
        "invalid road segment '{name}': distance {distance} must be > 0, \
         quality {quality_score} and safety {safety_level} must be within [0, 10]"
    )]
    InvalidSegmentInput {
        name: String,
        distance: f64,
        quality_score: f64,
        safety_level: f64,
    },

    /// The raw weights sum to zero (or to a non-finite value) and cannot be rescaled
    #[error("weights sum to {total}, which cannot be normalized to 1")]
    DegenerateWeightSum { total: f64 },

    /// No route was entered, or none survived the long-route filter
    #[error("no routes available")]
    EmptyRouteSet,
}

/// Failures raised while collecting input from a session or a route file
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed route file: {0}")]
    Json(#[from] serde_json::Error),

    /// Input ended while a value was still required
    #[error("input closed before all weights were entered")]
    InputClosed,

    #[error(transparent)]
    Selection(#[from] SelectionError),
}
