//! Blind exhaustive search.

use crate::algorithm::SearchOutcome;
use crate::errors::Result;
use crate::graph::CityGraph;
use crate::metric::Metric;

/// Try every simple path from `start` until one reaches `end`.
///
/// Only cities already on the current path are off limits, so a city
/// abandoned on one branch may be retried from another. That keeps the
/// search complete on finite graphs but exponential in the worst case.
/// Cost-so-far travels down the recursion as a plain argument, so
/// backtracking needs no un-crediting.
pub fn search<M: Metric>(
    graph: &CityGraph,
    metric: &M,
    start: &str,
    end: &str,
) -> Result<SearchOutcome> {
    graph.city(start)?;
    graph.city(end)?;

    let mut route = vec![start.to_string()];
    let mut visited = Vec::new();

    Ok(
        match explore(graph, metric, start, end, 0.0, &mut route, &mut visited) {
            Some(total) => SearchOutcome::success(route, total, visited),
            None => SearchOutcome::failure(visited),
        },
    )
}

fn explore<M: Metric>(
    graph: &CityGraph,
    metric: &M,
    current: &str,
    end: &str,
    cost: f64,
    route: &mut Vec<String>,
    visited: &mut Vec<String>,
) -> Option<f64> {
    visited.push(current.to_string());

    if current == end {
        return Some(cost);
    }

    for neighbor in graph.neighbors(current) {
        if route.iter().any(|city| city == neighbor) {
            continue;
        }

        let step = match (graph.lookup(current), graph.lookup(neighbor)) {
            (Some(from), Some(to)) => metric.edge_cost(from, to),
            _ => continue,
        };

        route.push(neighbor.clone());
        if let Some(total) = explore(graph, metric, neighbor, end, cost + step, route, visited) {
            return Some(total);
        }
        route.pop();
    }

    None
}
