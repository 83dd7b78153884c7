//! Iterative-deepening depth-first search.

use std::collections::HashSet;

use crate::algorithm::SearchOutcome;
use crate::errors::Result;
use crate::graph::CityGraph;
use crate::metric::Metric;
use crate::path;

/// Depth-limited DFS, retried with a limit of 0, 1, 2, ... until a path
/// is found or the limit reaches the number of cities in the graph.
///
/// The limit bounds the length of the path in cities, not in edges, and
/// the visited set follows the same enter/backtrack discipline as plain
/// DFS, rebuilt fresh for every depth attempt.
pub fn search<M: Metric>(
    graph: &CityGraph,
    metric: &M,
    start: &str,
    end: &str,
) -> Result<SearchOutcome> {
    graph.city(start)?;
    graph.city(end)?;

    let mut visited = Vec::new();
    let mut limit = 0;

    while limit < graph.len() {
        let mut seen = HashSet::new();
        let mut route = vec![start.to_string()];

        if bounded(graph, start, end, limit, &mut seen, &mut route, &mut visited) {
            let cost = path::cost_of(graph, metric, &route);
            return Ok(SearchOutcome::success(route, cost, visited));
        }

        limit += 1;
    }

    Ok(SearchOutcome::failure(visited))
}

fn bounded(
    graph: &CityGraph,
    current: &str,
    end: &str,
    limit: usize,
    seen: &mut HashSet<String>,
    route: &mut Vec<String>,
    visited: &mut Vec<String>,
) -> bool {
    visited.push(current.to_string());

    if current == end {
        return true;
    }

    if route.len() > limit {
        return false;
    }

    seen.insert(current.to_string());

    for neighbor in graph.neighbors(current) {
        if seen.contains(neighbor) {
            continue;
        }

        route.push(neighbor.clone());
        if bounded(graph, neighbor, end, limit, seen, route, visited) {
            return true;
        }
        route.pop();
    }

    seen.remove(current);
    false
}
