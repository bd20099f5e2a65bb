mod path;

use crate::graph::store::CountryGraph;
use std::collections::{HashMap, HashSet, VecDeque};

/// Breadth-first search from `from`, stopping once `to` is dequeued.
///
/// Returns whether `to` was reached together with the predecessor map.
fn bfs_search<'g>(
    graph: &'g CountryGraph,
    from: &'g str,
    to: &str,
) -> (bool, HashMap<&'g str, &'g str>) {
    let mut visited: HashSet<&'g str> = HashSet::new();
    let mut predecessors: HashMap<&'g str, &'g str> = HashMap::new();
    let mut queue: VecDeque<&'g str> = VecDeque::new();

    queue.push_back(from);
    visited.insert(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            return (true, predecessors);
        }

        let Some(neighbors) = graph.neighbors(current) else {
            continue;
        };

        for neighbor in neighbors.keys() {
            if visited.insert(neighbor.as_str()) {
                predecessors.insert(neighbor.as_str(), current);
                queue.push_back(neighbor.as_str());
            }
        }
    }

    (false, predecessors)
}

/// Find a minimum-hop route between two node keys.
///
/// Edge weights are ignored, so the route can differ from the path behind
/// [`shortest_distance`](crate::graph::shortest_distance). Neighbors are
/// expanded in sorted order, which makes ties deterministic. Returns an
/// empty route when either endpoint is not a top-level key or no path exists.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn find_route(graph: &CountryGraph, from: &str, to: &str) -> Vec<String> {
    let Some((source, _)) = graph.adjacency().get_key_value(from) else {
        return Vec::new();
    };
    if !graph.contains(to) {
        return Vec::new();
    }

    let (found, predecessors) = bfs_search(graph, source.as_str(), to);
    if !found {
        tracing::trace!(explored = predecessors.len(), "route_not_found");
        return Vec::new();
    }

    path::reconstruct_path(source, to, &predecessors)
}
