// Weight vector controlling how distance, quality, and safety are scored

use crate::error::SelectionError;
use crate::models::{Route, Score};
use serde::{Deserialize, Serialize};

/// Allowed deviation of the weight sum from 1 before rescaling kicks in
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-4;

/// User supplied coefficients for the linear route score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    #[serde(rename = "distance")]
    pub weight_distance: f64,

    #[serde(rename = "quality")]
    pub weight_quality: f64,

    #[serde(rename = "safety")]
    pub weight_safety: f64,
}

impl WeightVector {
    /// Creates a weight vector from raw, possibly unnormalized values
    pub fn new(weight_distance: f64, weight_quality: f64, weight_safety: f64) -> Self {
        Self {
            weight_distance,
            weight_quality,
            weight_safety,
        }
    }

    pub fn total(&self) -> f64 {
        self.weight_distance + self.weight_quality + self.weight_safety
    }

    /// Whether the weights are outside the tolerance and will be rescaled by `normalize`
    pub fn needs_normalization(&self) -> bool {
        (self.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE
    }

    /// Rescales all three weights by `1 / total` when they do not already sum to 1
    ///
    /// Bounds are not re-checked: a negative weight stays negative. A total
    /// that is zero or non-finite is rejected instead of producing NaN weights.
    pub fn normalize(self) -> Result<Self, SelectionError> {
        let total = self.total();
        if !total.is_finite() || total.abs() <= f64::EPSILON {
            return Err(SelectionError::DegenerateWeightSum { total });
        }

        if !self.needs_normalization() {
            return Ok(self);
        }

        let factor = 1.0 / total;
        Ok(Self {
            weight_distance: self.weight_distance * factor,
            weight_quality: self.weight_quality * factor,
            weight_safety: self.weight_safety * factor,
        })
    }

    /// Linear score of a route from its current derived totals
    ///
    /// Distance contributes positively, so a larger distance weight favors longer routes.
    pub fn score(&self, route: &Route) -> Score {
        self.weight_distance * route.total_distance()
            + self.weight_quality * route.average_quality_score()
            + self.weight_safety * route.average_safety_level()
    }
}
