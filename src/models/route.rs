// Route model holding road segments and their aggregated metrics

use crate::models::{Kilometers, Rating, RoadSegment};
use serde::Serialize;
use std::fmt;

/// Represents a candidate travel route made of ordered road segments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Name of the route
    pub name: String,

    /// Road segments in insertion order
    roads: Vec<RoadSegment>,

    /// Sum of all segment distances
    total_distance: Kilometers,

    /// Mean quality score over all segments
    average_quality_score: Rating,

    /// Mean safety level over all segments
    average_safety_level: Rating,
}

impl Route {
    /// Creates a new empty route with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            roads: Vec::new(),
            total_distance: 0.0,
            average_quality_score: 0.0,
            average_safety_level: 0.0,
        }
    }

    /// Creates a route from existing segments with its totals already calculated
    pub fn with_roads<S: Into<String>>(name: S, roads: Vec<RoadSegment>) -> Self {
        let mut route = Self::new(name);
        route.roads = roads;
        route.calculate_totals();
        route
    }

    /// Appends a road segment
    ///
    /// Derived totals are stale until `calculate_totals` runs again.
    pub fn add_road(&mut self, road: RoadSegment) {
        self.roads.push(road);
    }

    pub fn roads(&self) -> &[RoadSegment] {
        &self.roads
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Recomputes total distance and average quality/safety from the segments
    /// An empty route has all derived fields set to zero
    pub fn calculate_totals(&mut self) {
        let mut total_distance = 0.0;
        let mut quality_sum = 0.0;
        let mut safety_sum = 0.0;

        for road in &self.roads {
            total_distance += road.distance();
            quality_sum += road.quality_score();
            safety_sum += road.safety_level();
        }

        self.total_distance = total_distance;

        if self.roads.is_empty() {
            self.average_quality_score = 0.0;
            self.average_safety_level = 0.0;
        } else {
            let count = self.roads.len() as f64;
            self.average_quality_score = quality_sum / count;
            self.average_safety_level = safety_sum / count;
        }
    }

    pub fn total_distance(&self) -> Kilometers {
        self.total_distance
    }

    pub fn average_quality_score(&self) -> Rating {
        self.average_quality_score
    }

    pub fn average_safety_level(&self) -> Rating {
        self.average_safety_level
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Route with {} roads, Total Distance: {:.2} km, Average Quality Score: {:.2}, Average Safety Level: {:.2}",
            self.name,
            self.roads.len(),
            self.total_distance,
            self.average_quality_score,
            self.average_safety_level
        )
    }
}
