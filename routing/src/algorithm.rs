//! The six search strategies and their shared outcome type.
//!
//! Every strategy has the same shape: it takes the graph, a [Metric], and
//! the start and end city names, validates both names up front, and
//! reports a [SearchOutcome]. An unreachable destination is a normal
//! outcome, not an error. All per-search state (visited sets, predecessor
//! maps, frontiers) is local to the call.

use crate::errors::Result;
use crate::graph::CityGraph;
use crate::metric::Metric;

pub mod astar;
pub mod basic;
pub mod best;
pub mod brute;
pub mod iddfs;

/// What a search reports back.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Whether a route from start to end exists.
    pub found: bool,
    /// City names from start to end; empty when no route was found.
    pub path: Vec<String>,
    /// Total cost of the route under the metric the search ran with.
    pub total_cost: f64,
    /// Cities in the order the search expanded them, for diagnostics.
    pub visited: Vec<String>,
}

impl SearchOutcome {
    pub(crate) fn success(path: Vec<String>, total_cost: f64, visited: Vec<String>) -> Self {
        SearchOutcome {
            found: true,
            path,
            total_cost,
            visited,
        }
    }

    pub(crate) fn failure(visited: Vec<String>) -> Self {
        SearchOutcome {
            found: false,
            path: Vec::new(),
            total_cost: 0.0,
            visited,
        }
    }
}

/// The search strategies, in their conventional menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    BruteForce,
    BreadthFirst,
    DepthFirst,
    IterativeDeepening,
    BestFirst,
    AStar,
}

impl Strategy {
    pub fn all() -> [Strategy; 6] {
        [
            Strategy::BruteForce,
            Strategy::BreadthFirst,
            Strategy::DepthFirst,
            Strategy::IterativeDeepening,
            Strategy::BestFirst,
            Strategy::AStar,
        ]
    }

    /// Strategy for a 1-based menu selection.
    pub fn from_choice(choice: u32) -> Option<Strategy> {
        match choice {
            1 => Some(Strategy::BruteForce),
            2 => Some(Strategy::BreadthFirst),
            3 => Some(Strategy::DepthFirst),
            4 => Some(Strategy::IterativeDeepening),
            5 => Some(Strategy::BestFirst),
            6 => Some(Strategy::AStar),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::BruteForce => "undirected (blind) brute-force approach",
            Strategy::BreadthFirst => "breadth-first search",
            Strategy::DepthFirst => "depth-first search",
            Strategy::IterativeDeepening => "ID-DFS search",
            Strategy::BestFirst => "best-first search",
            Strategy::AStar => "A* search",
        }
    }

    pub fn run<M: Metric>(
        &self,
        graph: &CityGraph,
        metric: &M,
        start: &str,
        end: &str,
    ) -> Result<SearchOutcome> {
        match self {
            Strategy::BruteForce => brute::search(graph, metric, start, end),
            Strategy::BreadthFirst => basic::bfs(graph, metric, start, end),
            Strategy::DepthFirst => basic::dfs(graph, metric, start, end),
            Strategy::IterativeDeepening => iddfs::search(graph, metric, start, end),
            Strategy::BestFirst => best::search(graph, metric, start, end),
            Strategy::AStar => astar::search(graph, metric, start, end),
        }
    }
}

#[cfg(test)]
mod test {
    use super::basic::{bfs, dfs};
    use super::*;
    use crate::errors::SearchError;
    use crate::metric::{GreatCircle, Hops};

    fn chain() -> CityGraph {
        CityGraph::from_adjacency("A B\nB C".as_bytes()).unwrap()
    }

    // B and D both bridge A to E, but only one extra city (F) hangs off D.
    fn diamond() -> CityGraph {
        CityGraph::from_adjacency("A B\nA D\nB E\nD F\nF E".as_bytes()).unwrap()
    }

    fn disconnected() -> CityGraph {
        CityGraph::from_adjacency("A B\nC D".as_bytes()).unwrap()
    }

    // Triangle of Kansas cities, every pair within the 100 km threshold.
    fn triangle() -> CityGraph {
        let input = "Wichita, 37.6872, -97.3301\n\
                     Newton, 38.0467, -97.3450\n\
                     Hutchinson, 38.0608, -97.9298\n";
        CityGraph::from_coordinates(input.as_bytes()).unwrap()
    }

    fn assert_connected(graph: &CityGraph, outcome: &SearchOutcome, start: &str, end: &str) {
        assert!(outcome.found);
        assert_eq!(outcome.path.first().map(String::as_str), Some(start));
        assert_eq!(outcome.path.last().map(String::as_str), Some(end));
        for pair in outcome.path.windows(2) {
            assert!(
                graph.neighbors(&pair[0]).contains(&pair[1]),
                "{} -> {} is not an edge",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn every_strategy_finds_the_only_chain_path() {
        let graph = chain();
        for strategy in Strategy::all().iter() {
            let outcome = strategy.run(&graph, &Hops, "A", "C").unwrap();
            assert_eq!(outcome.path, ["A", "B", "C"], "{:?}", strategy);
            assert_eq!(outcome.total_cost, 2.0, "{:?}", strategy);
        }
    }

    #[test]
    fn every_strategy_returns_a_real_path() {
        let graph = diamond();
        for strategy in Strategy::all().iter() {
            let outcome = strategy.run(&graph, &Hops, "A", "E").unwrap();
            assert_connected(&graph, &outcome, "A", "E");
        }
    }

    #[test]
    fn every_strategy_reports_unreachable_without_error() {
        let graph = disconnected();
        for strategy in Strategy::all().iter() {
            let outcome = strategy.run(&graph, &Hops, "A", "D").unwrap();
            assert!(!outcome.found, "{:?}", strategy);
            assert!(outcome.path.is_empty(), "{:?}", strategy);
        }
    }

    #[test]
    fn every_strategy_rejects_a_missing_city() {
        let graph = chain();
        for strategy in Strategy::all().iter() {
            match strategy.run(&graph, &Hops, "Nowhere", "C") {
                Err(SearchError::CityNotFound(name)) => assert_eq!(name, "Nowhere"),
                other => panic!("{:?}: unexpected result {:?}", strategy, other),
            }
            match strategy.run(&graph, &Hops, "A", "Nowhere") {
                Err(SearchError::CityNotFound(name)) => assert_eq!(name, "Nowhere"),
                other => panic!("{:?}: unexpected result {:?}", strategy, other),
            }
        }
    }

    #[test]
    fn every_strategy_is_deterministic() {
        let graph = diamond();
        for strategy in Strategy::all().iter() {
            let first = strategy.run(&graph, &Hops, "A", "E").unwrap();
            let second = strategy.run(&graph, &Hops, "A", "E").unwrap();
            assert_eq!(first.path, second.path, "{:?}", strategy);
            assert_eq!(first.visited, second.visited, "{:?}", strategy);
        }
    }

    #[test]
    fn bfs_path_is_minimal_in_edge_count() {
        let graph = diamond();
        let outcome = bfs(&graph, &Hops, "A", "E").unwrap();
        assert_eq!(outcome.path.len(), 3);
    }

    #[test]
    fn astar_matches_bfs_on_unit_cost_graphs() {
        let graph = diamond();
        let breadth = bfs(&graph, &Hops, "A", "E").unwrap();
        let star = astar::search(&graph, &Hops, "A", "E").unwrap();
        assert_eq!(star.total_cost, breadth.total_cost);
    }

    #[test]
    fn astar_is_never_worse_than_best_first_on_coordinates() {
        let graph = triangle();
        let star = astar::search(&graph, &GreatCircle, "Wichita", "Hutchinson").unwrap();
        let greedy = best::search(&graph, &GreatCircle, "Wichita", "Hutchinson").unwrap();

        // The direct edge is the shortest great-circle route.
        assert_eq!(star.path, ["Wichita", "Hutchinson"]);
        assert!(greedy.total_cost >= star.total_cost);
    }

    #[test]
    fn dfs_follows_neighbor_order() {
        let graph = diamond();
        let outcome = dfs(&graph, &Hops, "A", "E").unwrap();
        // A's first neighbor is B, and B reaches E directly.
        assert_eq!(outcome.path, ["A", "B", "E"]);
    }
}
