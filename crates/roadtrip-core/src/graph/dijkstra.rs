use crate::error::{Result, RoadTripError};
use crate::graph::store::CountryGraph;
use crate::graph::types::Distance;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated distance)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry<'g> {
    pub country: &'g str,
    pub accumulated: Distance,
}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated
            .cmp(&other.accumulated)
            .then_with(|| self.country.cmp(other.country))
    }
}

/// State tracked during a single-pair Dijkstra search
struct DijkstraState<'g> {
    finalized: HashSet<&'g str>,
    best: HashMap<&'g str, Distance>,
    heap: BinaryHeap<Reverse<HeapEntry<'g>>>,
}

impl<'g> DijkstraState<'g> {
    fn new(source: &'g str) -> Self {
        let mut state = Self {
            finalized: HashSet::new(),
            best: HashMap::new(),
            heap: BinaryHeap::new(),
        };
        state.best.insert(source, Distance::ZERO);
        state.heap.push(Reverse(HeapEntry {
            country: source,
            accumulated: Distance::ZERO,
        }));
        state
    }

    /// Best known distance; unseen countries are at infinity
    fn best_known(&self, country: &str) -> Option<Distance> {
        self.best.get(country).copied()
    }

    fn relax(&mut self, neighbor: &'g str, candidate: Distance) {
        let improves = self
            .best_known(neighbor)
            .is_none_or(|current| candidate < current);
        if improves {
            self.best.insert(neighbor, candidate);
            self.heap.push(Reverse(HeapEntry {
                country: neighbor,
                accumulated: candidate,
            }));
        }
    }
}

/// Weighted shortest distance between two node keys.
///
/// Both arguments must already be canonical keys. Stale heap entries are
/// skipped via the finalized set instead of a decrease-key operation, and
/// the search stops as soon as `to` is popped. Countries without an
/// adjacency entry have no outgoing edges, and an endpoint that is not a
/// top-level key has no path at all.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn shortest_distance(graph: &CountryGraph, from: &str, to: &str) -> Result<Distance> {
    let Some((source, _)) = graph.adjacency().get_key_value(from) else {
        return Err(RoadTripError::no_path(from, to));
    };
    if !graph.contains(to) {
        return Err(RoadTripError::no_path(from, to));
    }

    let mut state = DijkstraState::new(source.as_str());

    while let Some(Reverse(HeapEntry {
        country: current,
        accumulated,
    })) = state.heap.pop()
    {
        if !state.finalized.insert(current) {
            continue;
        }

        if current == to {
            tracing::trace!(settled = state.finalized.len(), "target_reached");
            return Ok(accumulated);
        }

        let Some(neighbors) = graph.neighbors(current) else {
            continue;
        };

        for (neighbor, &weight) in neighbors {
            if state.finalized.contains(neighbor.as_str()) {
                continue;
            }
            state.relax(neighbor.as_str(), accumulated + weight);
        }
    }

    Err(RoadTripError::no_path(from, to))
}
