//! A* search.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::algorithm::SearchOutcome;
use crate::errors::Result;
use crate::graph::CityGraph;
use crate::metric::Metric;
use crate::path;

/// Heap entry carrying the cumulative cost at enqueue time and the
/// priority `g + h` computed from it. Ordering is reversed for a min-heap,
/// with the city name as a deterministic tie-break.
#[derive(Debug)]
struct Entry {
    city: String,
    cost: f64,
    priority: f64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.city.cmp(&self.city))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Expand the frontier city with the lowest `cost so far + estimate`.
///
/// Whenever a neighbor is reached with a strictly lower cumulative cost
/// than recorded, its cost and predecessor are updated and a fresh entry
/// is pushed; the superseded entry stays in the heap and is skipped at pop
/// time once its cost exceeds the recorded best (lazy deletion). The
/// search stops when `end` is popped with a live entry.
pub fn search<M: Metric>(
    graph: &CityGraph,
    metric: &M,
    start: &str,
    end: &str,
) -> Result<SearchOutcome> {
    let origin = graph.city(start)?;
    let target = graph.city(end)?;

    let mut heap = BinaryHeap::new();
    let mut best: HashMap<String, f64> = HashMap::new();
    let mut parents: HashMap<String, String> = HashMap::new();
    let mut visited = Vec::new();

    best.insert(start.to_string(), 0.0);
    heap.push(Entry {
        city: start.to_string(),
        cost: 0.0,
        priority: metric.heuristic(origin, target),
    });

    while let Some(Entry { city: current, cost, .. }) = heap.pop() {
        // Stale entry: a cheaper route to this city was found after it
        // was queued.
        if best.get(&current).map_or(false, |&known| cost > known) {
            continue;
        }

        visited.push(current.clone());

        if current == end {
            let route = path::reconstruct(&parents, start, end);
            return Ok(SearchOutcome::success(route, cost, visited));
        }

        let here = match graph.lookup(&current) {
            Some(city) => city,
            None => continue,
        };

        for neighbor in graph.neighbors(&current) {
            let next = match graph.lookup(neighbor) {
                Some(city) => city,
                None => continue,
            };

            let tentative = cost + metric.edge_cost(here, next);
            let improved = best.get(neighbor).map_or(true, |&known| tentative < known);

            if improved {
                best.insert(neighbor.clone(), tentative);
                parents.insert(neighbor.clone(), current.clone());
                heap.push(Entry {
                    city: neighbor.clone(),
                    cost: tentative,
                    priority: tentative + metric.heuristic(next, target),
                });
            }
        }
    }

    Ok(SearchOutcome::failure(visited))
}
