// Road segment model representing one stretch of a route

use crate::error::SelectionError;
use crate::models::{Kilometers, Rating};
use serde::Serialize;
use std::fmt;

/// Upper bound of the quality and safety rating scale
pub const MAX_RATING: Rating = 10.0;

/// Represents a single road with its distance, quality, and safety attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadSegment {
    name: String,
    distance: Kilometers,
    quality_score: Rating,
    safety_level: Rating,
}

impl RoadSegment {
    /// Creates a new road segment after validating its attributes
    ///
    /// Distance must be finite and strictly positive, and both ratings must
    /// lie in `[0, MAX_RATING]`. NaN never satisfies these bounds.
    pub fn new<S: Into<String>>(
        name: S,
        distance: Kilometers,
        quality_score: Rating,
        safety_level: Rating,
    ) -> Result<Self, SelectionError> {
        let name = name.into();
        let valid = distance.is_finite()
            && distance > 0.0
            && (0.0..=MAX_RATING).contains(&quality_score)
            && (0.0..=MAX_RATING).contains(&safety_level);

        if !valid {
            return Err(SelectionError::InvalidSegmentInput {
                name,
                distance,
                quality_score,
                safety_level,
            });
        }

        Ok(Self {
            name,
            distance,
            quality_score,
            safety_level,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn distance(&self) -> Kilometers {
        self.distance
    }

    pub fn quality_score(&self) -> Rating {
        self.quality_score
    }

    pub fn safety_level(&self) -> Rating {
        self.safety_level
    }
}

impl fmt::Display for RoadSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Road: {}, Distance: {} km, Quality Score: {}, Safety Level: {}",
            self.name, self.distance, self.quality_score, self.safety_level
        )
    }
}
