//! Greedy best-first search.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::algorithm::SearchOutcome;
use crate::errors::Result;
use crate::graph::CityGraph;
use crate::metric::Metric;
use crate::path;

/// Heap entry ordered by the heuristic estimate alone. The ordering is
/// reversed so that [BinaryHeap] pops the smallest estimate, with the city
/// name as a deterministic tie-break.
#[derive(Debug)]
struct Guess {
    city: String,
    estimate: f64,
}

impl PartialEq for Guess {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Guess {}

impl Ord for Guess {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .partial_cmp(&self.estimate)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.city.cmp(&self.city))
    }
}

impl PartialOrd for Guess {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Expand whichever frontier city the heuristic likes best, ignoring the
/// cost already paid to get there.
///
/// A city is marked visited the moment it is enqueued and is never queued
/// again, even if a cheaper route to it turns up later. A misleading
/// heuristic can therefore lock the search into a longer route; the
/// result is not guaranteed optimal.
pub fn search<M: Metric>(
    graph: &CityGraph,
    metric: &M,
    start: &str,
    end: &str,
) -> Result<SearchOutcome> {
    graph.city(start)?;
    let target = graph.city(end)?;

    let mut heap = BinaryHeap::new();
    let mut parents: HashMap<String, String> = HashMap::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut visited = Vec::new();

    heap.push(Guess {
        city: start.to_string(),
        estimate: 0.0,
    });
    seen.insert(start.to_string());

    while let Some(Guess { city: current, .. }) = heap.pop() {
        visited.push(current.clone());

        if current == end {
            let route = path::reconstruct(&parents, start, end);
            let cost = path::cost_of(graph, metric, &route);
            return Ok(SearchOutcome::success(route, cost, visited));
        }

        for neighbor in graph.neighbors(&current) {
            if seen.insert(neighbor.clone()) {
                let estimate = match graph.lookup(neighbor) {
                    Some(city) => metric.heuristic(city, target),
                    None => continue,
                };
                parents.insert(neighbor.clone(), current.clone());
                heap.push(Guess {
                    city: neighbor.clone(),
                    estimate,
                });
            }
        }
    }

    Ok(SearchOutcome::failure(visited))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::metric::{GreatCircle, Hops};

    #[test]
    fn follows_the_heuristic_toward_the_target() {
        // Salina sits north of Newton, away from the Wichita-Hutchinson
        // axis, so the heuristic prefers Hutchinson's side at every step.
        let input = "Wichita, 37.6872, -97.3301\n\
                     Newton, 38.0467, -97.3450\n\
                     Hutchinson, 38.0608, -97.9298\n\
                     Salina, 38.8403, -97.6114\n";
        let graph = CityGraph::from_coordinates(input.as_bytes()).unwrap();
        let outcome = search(&graph, &GreatCircle, "Wichita", "Hutchinson").unwrap();

        assert_eq!(outcome.path, ["Wichita", "Hutchinson"]);
        assert!(!outcome.visited.contains(&"Salina".to_string()));
    }

    #[test]
    fn zero_heuristic_degenerates_to_name_order() {
        // Under the stub heuristic every estimate ties, so the queue
        // falls back to the lexicographic tie-break.
        let graph = CityGraph::from_adjacency("A C\nA B\nB D\nC D".as_bytes()).unwrap();
        let outcome = search(&graph, &Hops, "A", "D").unwrap();

        assert_eq!(outcome.visited, ["A", "B", "C", "D"]);
        assert_eq!(outcome.path, ["A", "B", "D"]);
    }

    #[test]
    fn unreachable_is_not_an_error() {
        let graph = CityGraph::from_adjacency("A B\nC D".as_bytes()).unwrap();
        let outcome = search(&graph, &Hops, "A", "C").unwrap();
        assert!(!outcome.found);
    }
}
