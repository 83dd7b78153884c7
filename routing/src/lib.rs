//! Route finding between cities over a graph loaded from a file.
//!
//! The graph ([CityGraph]) can be built from an adjacency-pair file or from
//! a coordinate file, and six search strategies ([Strategy]) find a route
//! between two cities over it. Edge costs and heuristics are supplied by a
//! [Metric] so that the same graph store and algorithms serve both the
//! unit-cost and the geographic flavor of the problem.

pub mod algorithm;
mod errors;
pub mod graph;
pub mod metric;
mod path;

pub use errors::LoadError;
pub use errors::Result as SearchResult;
pub use errors::SearchError;

pub use graph::City;
pub use graph::CityGraph;
pub use graph::Coordinates;

pub use metric::GreatCircle;
pub use metric::Hops;
pub use metric::Metric;

pub use algorithm::SearchOutcome;
pub use algorithm::Strategy;

pub use algorithm::astar;
pub use algorithm::basic::bfs;
pub use algorithm::basic::dfs;
pub use algorithm::best;
pub use algorithm::brute;
pub use algorithm::iddfs;
