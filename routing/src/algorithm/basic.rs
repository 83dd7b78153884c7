//! Uninformed searches: breadth-first and depth-first.

pub use self::breadth::bfs;
pub use self::depth::dfs;

mod breadth {
    use std::collections::{HashMap, HashSet, VecDeque};

    use crate::algorithm::SearchOutcome;
    use crate::errors::Result;
    use crate::graph::CityGraph;
    use crate::metric::Metric;
    use crate::path;

    /// Breadth-first search.
    ///
    /// Cities are marked visited when enqueued, which also records their
    /// predecessor; the search stops the first time `end` is dequeued.
    /// The path is minimal in edge count, which makes it minimal in cost
    /// only when every edge costs the same.
    pub fn bfs<M: Metric>(
        graph: &CityGraph,
        metric: &M,
        start: &str,
        end: &str,
    ) -> Result<SearchOutcome> {
        graph.city(start)?;
        graph.city(end)?;

        let mut queue = VecDeque::new();
        let mut parents: HashMap<String, String> = HashMap::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut visited = Vec::new();

        queue.push_back(start.to_string());
        seen.insert(start.to_string());

        while let Some(current) = queue.pop_front() {
            visited.push(current.clone());

            if current == end {
                let route = path::reconstruct(&parents, start, end);
                let cost = path::cost_of(graph, metric, &route);
                return Ok(SearchOutcome::success(route, cost, visited));
            }

            for neighbor in graph.neighbors(&current) {
                if seen.insert(neighbor.clone()) {
                    parents.insert(neighbor.clone(), current.clone());
                    queue.push_back(neighbor.clone());
                }
            }
        }

        Ok(SearchOutcome::failure(visited))
    }

    #[cfg(test)]
    mod test {
        use super::*;
        use crate::metric::Hops;

        #[test]
        fn takes_the_fewest_edges() {
            // A reaches E in two hops via B, or three via D and F.
            let graph = CityGraph::from_adjacency("A D\nD F\nF E\nA B\nB E".as_bytes()).unwrap();
            let outcome = bfs(&graph, &Hops, "A", "E").unwrap();

            assert_eq!(outcome.path, ["A", "B", "E"]);
            assert_eq!(outcome.total_cost, 2.0);
        }

        #[test]
        fn visits_in_frontier_order() {
            let graph = CityGraph::from_adjacency("A B\nA C\nB D".as_bytes()).unwrap();
            let outcome = bfs(&graph, &Hops, "A", "D").unwrap();
            assert_eq!(outcome.visited, ["A", "B", "C", "D"]);
        }

        #[test]
        fn start_equals_end() {
            let graph = CityGraph::from_adjacency("A B".as_bytes()).unwrap();
            let outcome = bfs(&graph, &Hops, "A", "A").unwrap();

            assert_eq!(outcome.path, ["A"]);
            assert_eq!(outcome.total_cost, 0.0);
        }
    }
}

mod depth {
    use std::collections::HashSet;

    use crate::algorithm::SearchOutcome;
    use crate::errors::Result;
    use crate::graph::CityGraph;
    use crate::metric::Metric;
    use crate::path;

    /// Depth-first search.
    ///
    /// A city is marked visited on entry and unmarked on backtrack, so it
    /// may be reached again through a different branch after an
    /// unsuccessful one. The first path found is returned; it is not
    /// necessarily the shortest.
    pub fn dfs<M: Metric>(
        graph: &CityGraph,
        metric: &M,
        start: &str,
        end: &str,
    ) -> Result<SearchOutcome> {
        graph.city(start)?;
        graph.city(end)?;

        let mut seen = HashSet::new();
        let mut route = vec![start.to_string()];
        let mut visited = Vec::new();

        Ok(
            if descend(graph, start, end, &mut seen, &mut route, &mut visited) {
                let cost = path::cost_of(graph, metric, &route);
                SearchOutcome::success(route, cost, visited)
            } else {
                SearchOutcome::failure(visited)
            },
        )
    }

    fn descend(
        graph: &CityGraph,
        current: &str,
        end: &str,
        seen: &mut HashSet<String>,
        route: &mut Vec<String>,
        visited: &mut Vec<String>,
    ) -> bool {
        visited.push(current.to_string());

        if current == end {
            return true;
        }

        seen.insert(current.to_string());

        for neighbor in graph.neighbors(current) {
            if seen.contains(neighbor) {
                continue;
            }

            route.push(neighbor.clone());
            if descend(graph, neighbor, end, seen, route, visited) {
                return true;
            }
            route.pop();
        }

        seen.remove(current);
        false
    }

    #[cfg(test)]
    mod test {
        use super::*;
        use crate::metric::Hops;

        #[test]
        fn returns_the_first_path_found() {
            // Depth-first takes A's first neighbor D and only then B, so
            // it returns the longer route even though a two-hop one exists.
            let graph = CityGraph::from_adjacency("A D\nD F\nF E\nA B\nB E".as_bytes()).unwrap();
            let outcome = dfs(&graph, &Hops, "A", "E").unwrap();

            assert_eq!(outcome.path, ["A", "D", "F", "E"]);
            assert_eq!(outcome.total_cost, 3.0);
        }

        #[test]
        fn backtracking_unmarks_the_branch() {
            // The dead end D must not block reaching C through B.
            let graph = CityGraph::from_adjacency("A D\nA B\nB C".as_bytes()).unwrap();
            let outcome = dfs(&graph, &Hops, "A", "C").unwrap();
            assert_eq!(outcome.path, ["A", "B", "C"]);
        }

        #[test]
        fn no_path_in_a_disconnected_graph() {
            let graph = CityGraph::from_adjacency("A B\nC D".as_bytes()).unwrap();
            let outcome = dfs(&graph, &Hops, "A", "C").unwrap();
            assert!(!outcome.found);
        }
    }
}
