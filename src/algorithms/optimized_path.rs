use log::debug;

use crate::algorithms::PathSelector;
use crate::models::{Route, Score, WeightVector};

/// Routes longer than this multiple of the shortest route are discarded
pub const DEFAULT_LONG_ROUTE_FACTOR: f64 = 1.3;

/// Weighted route selector with a relative-distance prefilter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizedPathSelection {
    /// Multiple of the shortest total distance a route may reach and still be kept
    long_route_factor: f64,
}

impl OptimizedPathSelection {
    /// Creates a selector with the default long-route factor
    pub fn new() -> Self {
        Self {
            long_route_factor: DEFAULT_LONG_ROUTE_FACTOR,
        }
    }

    /// Creates a selector with a custom long-route factor
    pub fn with_long_route_factor(long_route_factor: f64) -> Self {
        Self { long_route_factor }
    }

    pub fn long_route_factor(&self) -> f64 {
        self.long_route_factor
    }
}

impl Default for OptimizedPathSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl PathSelector for OptimizedPathSelection {
    fn filter_long_routes(&self, routes: Vec<Route>) -> Vec<Route> {
        // Empty input leaves this at infinity, but there is nothing to compare against
        let min_distance = routes
            .iter()
            .map(Route::total_distance)
            .fold(f64::INFINITY, f64::min);
        let threshold = min_distance * self.long_route_factor;

        routes
            .into_iter()
            .filter(|route| {
                let keep = route.total_distance() <= threshold;
                if !keep {
                    debug!(
                        "Dropping route '{}': {:.2} km exceeds {:.2} km",
                        route.name,
                        route.total_distance(),
                        threshold
                    );
                }
                keep
            })
            .collect()
    }

    fn find_optimal_route<'a>(
        &self,
        routes: &'a mut [Route],
        weights: &WeightVector,
    ) -> Option<&'a Route> {
        let best = routes
            .iter_mut()
            .fold(None, |best: Option<(&'a Route, Score)>, route| {
                route.calculate_totals();
                let route: &'a Route = route;
                let score = weights.score(route);
                debug!("Route '{}' scored {}", route.name, score);

                match best {
                    None => Some((route, score)),
                    Some((incumbent, best_score)) => {
                        // Exact ties go to the strictly shorter route
                        let replaces = score > best_score
                            || (score == best_score
                                && route.total_distance() < incumbent.total_distance());
                        if replaces {
                            Some((route, score))
                        } else {
                            Some((incumbent, best_score))
                        }
                    }
                }
            });

        best.map(|(route, _)| route)
    }
}
