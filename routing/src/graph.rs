//! The city graph: nodes keyed by name, adjacency built once from a file
//! and read-only afterward.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};

use crate::errors::{LoadError, SearchError};
use crate::metric::{haversine, NEIGHBOR_THRESHOLD_KM};

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A node in the graph. The name is the identity and never changes;
/// coordinates are present only when the graph was built from a
/// coordinate file.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    name: String,
    coordinates: Option<Coordinates>,
}

impl City {
    fn new<S: Into<String>>(name: S) -> City {
        City {
            name: name.into(),
            coordinates: None,
        }
    }

    fn located<S: Into<String>>(name: S, latitude: f64, longitude: f64) -> City {
        City {
            name: name.into(),
            coordinates: Some(Coordinates {
                latitude,
                longitude,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }
}

/// City graph with directed adjacency lists.
///
/// Neighbor lists keep insertion order, and the graph remembers the order
/// in which cities were first seen, so traversal order is reproducible
/// even though the backing storage is a hash map.
#[derive(Debug, Default)]
pub struct CityGraph {
    cities: HashMap<String, City>,
    adjacency: HashMap<String, Vec<String>>,
    order: Vec<String>,
}

impl CityGraph {
    /// Build a graph from an adjacency file: one edge per line, two
    /// whitespace-separated city names. Each line adds both directions.
    /// Blank lines are skipped; any other malformed line aborts the load.
    pub fn from_adjacency<R: Read>(input: R) -> Result<CityGraph, LoadError> {
        let mut graph = CityGraph::default();

        for (index, line) in BufReader::new(input).lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let mut names = trimmed.split_whitespace();
            match (names.next(), names.next(), names.next()) {
                (Some(left), Some(right), None) => {
                    graph.add_edge(left, right);
                    graph.add_edge(right, left);
                }
                _ => return Err(LoadError::Adjacency { line: index + 1 }),
            }
        }

        Ok(graph)
    }

    /// Build a graph from a coordinate file: one city per line as
    /// `name, latitude, longitude`, surrounding whitespace tolerated.
    ///
    /// Adjacency is derived afterwards by comparing every pair of cities:
    /// an edge exists when the great-circle distance is within
    /// [NEIGHBOR_THRESHOLD_KM], self-loops excluded. The all-pairs pass is
    /// O(n²) in the number of cities and dominates construction time.
    pub fn from_coordinates<R: Read>(input: R) -> Result<CityGraph, LoadError> {
        let mut graph = CityGraph::default();

        for (index, line) in BufReader::new(input).lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let fields: Vec<&str> = trimmed.split(',').collect();
            if fields.len() != 3 {
                return Err(LoadError::Coordinate { line: index + 1 });
            }

            let latitude = parse_number(fields[1], index + 1)?;
            let longitude = parse_number(fields[2], index + 1)?;
            graph.insert(City::located(fields[0].trim(), latitude, longitude));
        }

        graph.derive_adjacency();
        Ok(graph)
    }

    fn insert(&mut self, city: City) {
        if !self.cities.contains_key(city.name()) {
            self.order.push(city.name().to_string());
        }
        self.cities.insert(city.name().to_string(), city);
    }

    fn add_edge(&mut self, from: &str, to: &str) {
        if !self.cities.contains_key(from) {
            self.insert(City::new(from));
        }
        if !self.cities.contains_key(to) {
            self.insert(City::new(to));
        }
        self.adjacency
            .entry(from.to_string())
            .or_insert_with(Vec::new)
            .push(to.to_string());
    }

    fn derive_adjacency(&mut self) {
        let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();

        for from in &self.order {
            for to in &self.order {
                if from == to {
                    continue;
                }

                let near = match (
                    self.cities[from].coordinates(),
                    self.cities[to].coordinates(),
                ) {
                    (Some(a), Some(b)) => haversine(a, b) <= NEIGHBOR_THRESHOLD_KM,
                    _ => false,
                };

                if near {
                    adjacency
                        .entry(from.clone())
                        .or_insert_with(Vec::new)
                        .push(to.clone());
                }
            }
        }

        self.adjacency = adjacency;
    }

    pub fn lookup(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    /// Fail-fast lookup used at search entry: an absent start or end city
    /// is a hard validation error, never a silent null reference.
    pub fn city(&self, name: &str) -> Result<&City, SearchError> {
        self.cities
            .get(name)
            .ok_or_else(|| SearchError::CityNotFound(name.to_string()))
    }

    /// Outgoing neighbors in insertion order. A city with no recorded
    /// edges (or an unknown name) yields an empty slice, not an error.
    pub fn neighbors(&self, name: &str) -> &[String] {
        self.adjacency
            .get(name)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cities.contains_key(name)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cities in the order they were first seen.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.order.iter().map(move |name| &self.cities[name])
    }
}

fn parse_number(field: &str, line: usize) -> Result<f64, LoadError> {
    field
        .trim()
        .parse()
        .map_err(|source| LoadError::BadNumber { line, source })
}
