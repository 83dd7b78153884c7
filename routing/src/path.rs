//! Path reconstruction from a predecessor map.

use std::collections::HashMap;

use crate::graph::CityGraph;
use crate::metric::Metric;

/// Walk the predecessor map backward from `end` until `start` is reached,
/// then reverse. The caller guarantees the map traces back to `start`.
pub(crate) fn reconstruct(
    parents: &HashMap<String, String>,
    start: &str,
    end: &str,
) -> Vec<String> {
    let mut route = vec![end.to_string()];
    let mut current = end;

    while current != start {
        match parents.get(current) {
            Some(parent) => {
                route.push(parent.clone());
                current = parent;
            }
            None => break,
        }
    }

    route.reverse();
    route
}

/// Total edge cost along a route, for searches that do not accumulate
/// cost while traversing.
pub(crate) fn cost_of<M: Metric>(graph: &CityGraph, metric: &M, route: &[String]) -> f64 {
    route
        .windows(2)
        .filter_map(|pair| match (graph.lookup(&pair[0]), graph.lookup(&pair[1])) {
            (Some(from), Some(to)) => Some(metric.edge_cost(from, to)),
            _ => None,
        })
        .sum()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::metric::Hops;

    #[test]
    fn walks_backward_and_reverses() {
        let mut parents = HashMap::new();
        parents.insert("C".to_string(), "B".to_string());
        parents.insert("B".to_string(), "A".to_string());

        assert_eq!(reconstruct(&parents, "A", "C"), ["A", "B", "C"]);
    }

    #[test]
    fn start_equals_end_is_a_single_step_route() {
        let parents = HashMap::new();
        assert_eq!(reconstruct(&parents, "A", "A"), ["A"]);
    }

    #[test]
    fn cost_sums_consecutive_edges() {
        let graph = CityGraph::from_adjacency("A B\nB C".as_bytes()).unwrap();
        let route = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert_eq!(cost_of(&graph, &Hops, &route), 2.0);
    }
}
