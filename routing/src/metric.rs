//! Edge-cost and heuristic strategies.
//!
//! A [Metric] supplies the two measures the cost-aware searches need, so
//! one graph store and one set of algorithms serve both flavors of the
//! problem: unit-cost edges over a plain adjacency file, and geographic
//! distances over a coordinate file.

use crate::graph::{City, Coordinates};

/// Earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Two cities closer than this (great-circle, kilometers) are adjacent in
/// a coordinate-derived graph.
pub const NEIGHBOR_THRESHOLD_KM: f64 = 100.0;

pub trait Metric {
    /// Cost of traveling one edge.
    fn edge_cost(&self, from: &City, to: &City) -> f64;

    /// Estimated remaining cost to the target.
    fn heuristic(&self, from: &City, target: &City) -> f64;
}

/// Unit-cost edges and a zero heuristic.
///
/// The zero heuristic is deliberate: with it, best-first and A* degenerate
/// to uninformed searches over an adjacency-file graph. That is the
/// baseline behavior of this metric, not a gap to fill in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hops;

impl Metric for Hops {
    fn edge_cost(&self, _from: &City, _to: &City) -> f64 {
        1.0
    }

    fn heuristic(&self, _from: &City, _target: &City) -> f64 {
        0.0
    }
}

/// Geographic metric: great-circle edge cost in kilometers, straight-line
/// heuristic on raw degree values.
///
/// The heuristic is planar while the cost is geodesic, so the two are not
/// consistent with each other; the mismatch is kept on purpose. Cities
/// without coordinates fall back to unit cost and a zero heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreatCircle;

impl Metric for GreatCircle {
    fn edge_cost(&self, from: &City, to: &City) -> f64 {
        match (from.coordinates(), to.coordinates()) {
            (Some(a), Some(b)) => haversine(a, b),
            _ => 1.0,
        }
    }

    fn heuristic(&self, from: &City, target: &City) -> f64 {
        match (from.coordinates(), target.coordinates()) {
            (Some(a), Some(b)) => euclidean_degrees(a, b),
            _ => 0.0,
        }
    }
}

/// Great-circle distance between two positions, in kilometers.
pub fn haversine(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Straight-line distance on raw latitude/longitude values, in degrees.
pub fn euclidean_degrees(a: Coordinates, b: Coordinates) -> f64 {
    let dx = a.latitude - b.latitude;
    let dy = a.longitude - b.longitude;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::CityGraph;

    const WICHITA: Coordinates = Coordinates {
        latitude: 37.6872,
        longitude: -97.3301,
    };
    const NEWTON: Coordinates = Coordinates {
        latitude: 38.0467,
        longitude: -97.3450,
    };

    #[test]
    fn haversine_matches_known_distance() {
        // Wichita to Newton is almost exactly 40 km.
        let d = haversine(WICHITA, NEWTON);
        assert!((d - 40.0).abs() < 2.0, "distance was {}", d);
    }

    #[test]
    fn haversine_is_symmetric_and_zero_on_self() {
        assert_eq!(haversine(WICHITA, NEWTON), haversine(NEWTON, WICHITA));
        assert_eq!(haversine(WICHITA, WICHITA), 0.0);
    }

    #[test]
    fn euclidean_uses_raw_degrees() {
        let a = Coordinates {
            latitude: 3.0,
            longitude: 0.0,
        };
        let b = Coordinates {
            latitude: 0.0,
            longitude: 4.0,
        };
        assert_eq!(euclidean_degrees(a, b), 5.0);
    }

    #[test]
    fn hops_is_unit_cost_and_uninformed() {
        let graph = CityGraph::from_adjacency("Wichita Newton".as_bytes()).unwrap();
        let a = graph.city("Wichita").unwrap();
        let b = graph.city("Newton").unwrap();

        assert_eq!(Hops.edge_cost(a, b), 1.0);
        assert_eq!(Hops.heuristic(a, b), 0.0);
    }

    #[test]
    fn great_circle_falls_back_without_coordinates() {
        let graph = CityGraph::from_adjacency("Wichita Newton".as_bytes()).unwrap();
        let a = graph.city("Wichita").unwrap();
        let b = graph.city("Newton").unwrap();

        assert_eq!(GreatCircle.edge_cost(a, b), 1.0);
        assert_eq!(GreatCircle.heuristic(a, b), 0.0);
    }
}
