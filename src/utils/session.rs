// Line-oriented interactive session collecting routes and weights

use log::{info, warn};
use std::io::{BufRead, Write};

use crate::error::{SelectionError, SessionError};
use crate::models::{Route, WeightVector};
use crate::utils::init_routes::SegmentConfig;

/// Typed at the route name prompt to stop entering routes
pub const FINISH_ROUTES: &str = "exit";

/// Typed at the road name prompt to stop entering roads for the current route
pub const FINISH_ROADS: &str = "done";

/// Interactive session over any line reader and writer
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the session and returns its writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints a prompt and reads one trimmed line, `None` once input is exhausted
    fn prompt(&mut self, message: &str) -> Result<Option<String>, SessionError> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts until a number is entered, `None` once input is exhausted
    fn prompt_number(&mut self, message: &str) -> Result<Option<f64>, SessionError> {
        loop {
            let Some(answer) = self.prompt(message)? else {
                return Ok(None);
            };
            match answer.parse::<f64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a number.")?,
            }
        }
    }

    /// Collects routes until the finish token or the end of input
    pub fn collect_routes(&mut self) -> Result<Vec<Route>, SessionError> {
        let mut routes = Vec::new();

        while let Some(name) = self.prompt("Enter route name (or type 'exit' to finish):")? {
            if name.eq_ignore_ascii_case(FINISH_ROUTES) {
                break;
            }
            let route = self.collect_route(name)?;
            info!(
                "Route '{}' entered with {} roads",
                route.name,
                route.road_count()
            );
            routes.push(route);
        }

        Ok(routes)
    }

    /// Collects the roads of one route, skipping any that fail validation
    fn collect_route(&mut self, name: String) -> Result<Route, SessionError> {
        let mut route = Route::new(name);

        while let Some(segment) = self.collect_segment()? {
            match segment.into_segment() {
                Ok(road) => route.add_road(road),
                Err(e) => {
                    warn!("{}", e);
                    writeln!(self.output, "Invalid input, please enter valid values.")?;
                }
            }
        }

        route.calculate_totals();
        Ok(route)
    }

    /// Reads one raw segment, `None` when the route is finished or input ran out
    fn collect_segment(&mut self) -> Result<Option<SegmentConfig>, SessionError> {
        let Some(name) = self.prompt("Enter road name (or type 'done' to finish this route):")?
        else {
            return Ok(None);
        };
        if name.eq_ignore_ascii_case(FINISH_ROADS) {
            return Ok(None);
        }

        let Some(distance) = self.prompt_number("Enter distance (in km):")? else {
            return Ok(None);
        };
        let Some(quality_score) = self.prompt_number("Enter road quality score (0 to 10):")? else {
            return Ok(None);
        };
        let Some(safety_level) = self.prompt_number("Enter safety level (0 to 10):")? else {
            return Ok(None);
        };

        Ok(Some(SegmentConfig {
            name,
            distance,
            quality_score,
            safety_level,
        }))
    }

    /// Collects the three weights and normalizes them, asking again on a zero sum
    pub fn collect_weights(&mut self) -> Result<WeightVector, SessionError> {
        loop {
            let distance = self.required_number("Enter weight for Distance (0 to 1):")?;
            let quality = self.required_number("Enter weight for Quality (0 to 1):")?;
            let safety = self.required_number("Enter weight for Safety (0 to 1):")?;

            let raw = WeightVector::new(distance, quality, safety);
            match raw.normalize() {
                Ok(weights) => {
                    if raw.needs_normalization() {
                        warn!("Weights sum to {}, rescaling to 1", raw.total());
                        writeln!(
                            self.output,
                            "Warning: The total weight should sum up to 1. Adjusting weights to balance."
                        )?;
                    }
                    return Ok(weights);
                }
                Err(e @ SelectionError::DegenerateWeightSum { .. }) => {
                    warn!("{}", e);
                    writeln!(
                        self.output,
                        "The weights must not sum to zero, please enter them again."
                    )?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn required_number(&mut self, message: &str) -> Result<f64, SessionError> {
        self.prompt_number(message)?.ok_or(SessionError::InputClosed)
    }

    /// Prints the optimal route with its roads, or a notice when there is none
    pub fn report(&mut self, optimal: Option<&Route>) -> Result<(), SessionError> {
        match optimal {
            Some(route) => {
                writeln!(self.output, "Optimal Route: {}", route)?;
                for road in route.roads() {
                    writeln!(self.output, "  {}", road)?;
                }
            }
            None => writeln!(self.output, "No routes available.")?,
        }
        Ok(())
    }

    /// Prints the result as JSON or as plain text
    pub fn render(&mut self, optimal: Option<&Route>, json: bool) -> Result<(), SessionError> {
        if json {
            self.report_json(optimal)
        } else {
            self.report(optimal)
        }
    }

    /// Prints the optimal route as JSON, `null` when there is none
    pub fn report_json(&mut self, optimal: Option<&Route>) -> Result<(), SessionError> {
        serde_json::to_writer_pretty(&mut self.output, &optimal)?;
        writeln!(self.output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoadSegment;
    use std::io::Cursor;

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_collect_routes() {
        let mut s = session("North\nMain\n4\n8\n6\nSide\n6\n6\n8\ndone\nSouth\nDONE\nEXIT\n");
        let routes = s.collect_routes().unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].name, "North");
        assert_eq!(routes[0].road_count(), 2);
        assert_eq!(routes[0].total_distance(), 10.0);
        assert_eq!(routes[0].average_quality_score(), 7.0);
        assert_eq!(routes[1].name, "South");
        assert_eq!(routes[1].road_count(), 0);
    }

    #[test]
    fn test_invalid_segment_is_skipped_with_warning() {
        let mut s = session("R\nbad\n-1\n5\n5\ngood\n2\n5\n5\ndone\nexit\n");
        let routes = s.collect_routes().unwrap();

        assert_eq!(routes[0].road_count(), 1);
        assert_eq!(routes[0].roads()[0].name(), "good");
        assert!(output(s).contains("Invalid input, please enter valid values."));
    }

    #[test]
    fn test_infinite_distance_is_skipped() {
        let mut s = session("R\nendless\ninf\n5\n5\nreal\n4\n5\n5\ndone\nexit\n");
        let routes = s.collect_routes().unwrap();

        assert_eq!(routes[0].road_count(), 1);
        assert_eq!(routes[0].total_distance(), 4.0);
        assert!(output(s).contains("Invalid input, please enter valid values."));
    }

    #[test]
    fn test_non_numeric_answer_reprompts() {
        let mut s = session("R\nroad\nfar\n3\n5\n5\ndone\nexit\n");
        let routes = s.collect_routes().unwrap();

        assert_eq!(routes[0].total_distance(), 3.0);
        assert!(output(s).contains("Please enter a number."));
    }

    #[test]
    fn test_end_of_input_finishes_routes() {
        let mut s = session("R\nroad\n3\n5");
        let routes = s.collect_routes().unwrap();

        // The half-entered segment is dropped
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].road_count(), 0);
    }

    #[test]
    fn test_collect_weights_normalizes() {
        let mut s = session("0.5\n0.5\n0.5\n");
        let weights = s.collect_weights().unwrap();

        assert!((weights.total() - 1.0).abs() < 1e-9);
        assert!(output(s).contains("Adjusting weights to balance."));
    }

    #[test]
    fn test_collect_weights_without_adjustment() {
        let mut s = session("0.3\n0.4\n0.3\n");
        let weights = s.collect_weights().unwrap();

        assert_eq!(weights, WeightVector::new(0.3, 0.4, 0.3));
        assert!(!output(s).contains("Adjusting"));
    }

    #[test]
    fn test_zero_weights_reprompt() {
        let mut s = session("0\n0\n0\n1\n1\n2\n");
        let weights = s.collect_weights().unwrap();

        assert_eq!(weights, WeightVector::new(0.25, 0.25, 0.5));
        assert!(output(s).contains("must not sum to zero"));
    }

    #[test]
    fn test_weights_input_closed() {
        let mut s = session("0.3\n");
        assert!(matches!(
            s.collect_weights(),
            Err(SessionError::InputClosed)
        ));
    }

    #[test]
    fn test_report_none() {
        let mut s = session("");
        s.report(None).unwrap();
        assert_eq!(output(s), "No routes available.\n");
    }

    #[test]
    fn test_report_route_with_roads() {
        let mut s = session("");
        let route = Route::with_roads(
            "Valley",
            vec![RoadSegment::new("Low Rd", 7.5, 6.0, 8.0).unwrap()],
        );
        s.render(Some(&route), false).unwrap();

        assert_eq!(
            output(s),
            "Optimal Route: Valley - Route with 1 roads, Total Distance: 7.50 km, \
             Average Quality Score: 6.00, Average Safety Level: 8.00\n  \
             Road: Low Rd, Distance: 7.5 km, Quality Score: 6, Safety Level: 8\n"
        );
    }

    #[test]
    fn test_report_json_route() {
        let mut s = session("");
        let route = Route::with_roads(
            "Valley",
            vec![
                RoadSegment::new("Low Rd", 4.0, 6.0, 8.0).unwrap(),
                RoadSegment::new("High Rd", 2.0, 8.0, 6.0).unwrap(),
            ],
        );
        s.render(Some(&route), true).unwrap();

        let printed: serde_json::Value = serde_json::from_str(&output(s)).unwrap();
        assert_eq!(printed["name"], "Valley");
        assert_eq!(printed["total_distance"], 6.0);
        assert_eq!(printed["average_quality_score"], 7.0);
        assert_eq!(printed["average_safety_level"], 7.0);
        assert_eq!(printed["roads"].as_array().unwrap().len(), 2);
        assert_eq!(printed["roads"][0]["name"], "Low Rd");
        assert_eq!(printed["roads"][1]["distance"], 2.0);
    }

    #[test]
    fn test_report_json_none() {
        let mut s = session("");
        s.report_json(None).unwrap();
        assert_eq!(output(s), "null\n");
    }
}
