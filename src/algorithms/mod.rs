pub mod optimized_path;

// Common algorithm traits
use crate::error::SelectionError;
use crate::models::{Route, WeightVector};
use log::info;

/// Trait for optimal route selectors
pub trait PathSelector {
    /// Drop routes that are too long relative to the shortest one, keeping input order
    fn filter_long_routes(&self, routes: Vec<Route>) -> Vec<Route>;

    /// Score every route with the given weights and return the best one
    ///
    /// Totals are recalculated for every route before it is scored.
    fn find_optimal_route<'a>(
        &self,
        routes: &'a mut [Route],
        weights: &WeightVector,
    ) -> Option<&'a Route>;

    /// Aggregate, filter, and select in one pass over an owned route set
    fn select(&self, mut routes: Vec<Route>, weights: &WeightVector) -> Result<Route, SelectionError> {
        for route in routes.iter_mut() {
            route.calculate_totals();
        }

        let entered = routes.len();
        let mut candidates = self.filter_long_routes(routes);
        info!(
            "{} of {} routes remain after the long-route filter",
            candidates.len(),
            entered
        );

        self.find_optimal_route(&mut candidates, weights)
            .cloned()
            .ok_or(SelectionError::EmptyRouteSet)
    }
}
