use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{SelectionError, SessionError};
use crate::models::{Kilometers, Rating, RoadSegment, Route, WeightVector};

/// Raw road segment as entered by the user, not yet validated
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SegmentConfig {
    pub name: String,
    pub distance: Kilometers,
    pub quality_score: Rating,
    pub safety_level: Rating,
}

impl SegmentConfig {
    /// Validates the raw values into a road segment
    pub fn into_segment(self) -> Result<RoadSegment, SelectionError> {
        RoadSegment::new(self.name, self.distance, self.quality_score, self.safety_level)
    }
}

/// Raw route description with its unvalidated segments
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteConfig {
    pub name: String,

    #[serde(default)]
    pub roads: Vec<SegmentConfig>,
}

impl RouteConfig {
    /// Builds a route with calculated totals, dropping segments that fail validation
    pub fn build(self) -> Route {
        let mut route = Route::new(self.name);
        for segment in self.roads {
            match segment.into_segment() {
                Ok(road) => route.add_road(road),
                Err(e) => warn!("Skipping segment of route '{}': {}", route.name, e),
            }
        }
        route.calculate_totals();
        route
    }
}

/// Top level layout of a route file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteSetConfig {
    #[serde(default)]
    pub routes: Vec<RouteConfig>,

    /// Raw weights; collected interactively when missing
    #[serde(default)]
    pub weights: Option<WeightVector>,
}

/// Validated routes plus the raw weights a route file may carry
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSet {
    pub routes: Vec<Route>,
    pub weights: Option<WeightVector>,
}

impl RouteSet {
    /// Normalized weights from the file, `None` when the file carries none
    ///
    /// Rescaling is logged; a zero or non-finite sum is an error.
    pub fn normalized_weights(&self) -> Result<Option<WeightVector>, SelectionError> {
        let Some(raw) = self.weights else {
            return Ok(None);
        };

        let weights = raw.normalize()?;
        if raw.needs_normalization() {
            warn!("Weights sum to {}, rescaling to 1", raw.total());
        }
        Ok(Some(weights))
    }
}

impl From<RouteSetConfig> for RouteSet {
    fn from(config: RouteSetConfig) -> Self {
        Self {
            routes: config.routes.into_iter().map(RouteConfig::build).collect(),
            weights: config.weights,
        }
    }
}

/// Parses a route set from its JSON text
pub fn parse_route_set(json: &str) -> Result<RouteSet, SessionError> {
    let config: RouteSetConfig = serde_json::from_str(json)?;
    Ok(config.into())
}

/// Loads a route set from a JSON file
pub fn load_route_set(path: &Path) -> Result<RouteSet, SessionError> {
    let json = fs::read_to_string(path)?;
    let route_set = parse_route_set(&json)?;
    info!(
        "Loaded {} routes from {}",
        route_set.routes.len(),
        path.display()
    );
    Ok(route_set)
}
