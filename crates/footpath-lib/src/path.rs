use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use tracing::debug;

use crate::graph::{Weight, WeightedGraph};

/// Distance from the search source. `Unreached` orders after every finite
/// distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance<W> {
    Finite(W),
    Unreached,
}

impl<W: Copy> Distance<W> {
    /// The finite value, or `None` when unreached.
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Unreached => None,
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl<W: Weight> Distance<W> {
    fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.total_cmp(b),
            (Distance::Finite(_), Distance::Unreached) => Ordering::Less,
            (Distance::Unreached, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Unreached, Distance::Unreached) => Ordering::Equal,
        }
    }
}

/// Output of a single-source shortest-path search.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V, W> {
    source: V,
    distances: BTreeMap<V, Distance<W>>,
    predecessors: BTreeMap<V, Option<V>>,
    visited: Vec<V>,
}

impl<V: Ord + Clone, W: Weight> ShortestPaths<V, W> {
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Shortest known distance to `vertex`; unknown vertices are unreached.
    pub fn distance(&self, vertex: &V) -> Distance<W> {
        self.distances
            .get(vertex)
            .copied()
            .unwrap_or(Distance::Unreached)
    }

    /// Previous vertex on a shortest path to `vertex`. `None` for the source
    /// and for unreached vertices.
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex).and_then(Option::as_ref)
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_reached()
    }

    /// Vertices in the order they were finalized.
    pub fn visited(&self) -> &[V] {
        &self.visited
    }

    pub fn distances(&self) -> &BTreeMap<V, Distance<W>> {
        &self.distances
    }

    pub fn predecessors(&self) -> &BTreeMap<V, Option<V>> {
        &self.predecessors
    }

    /// Rebuild the path from the source to `destination` by walking the
    /// predecessor links. Returns `None` when `destination` is unreached.
    pub fn path_to(&self, destination: &V) -> Option<Vec<V>> {
        if !self.is_reachable(destination) {
            return None;
        }

        let mut path = vec![destination.clone()];
        let mut current = self.predecessor(destination);
        while let Some(vertex) = current {
            path.push(vertex.clone());
            current = self.predecessor(vertex);
        }
        path.reverse();

        debug_assert!(
            path.first() == Some(&self.source),
            "predecessor chain must end at the source"
        );
        Some(path)
    }
}

/// Run Dijkstra's algorithm from `source` over the whole graph.
///
/// Every vertex starts unreached and is queued once; the source is queued a
/// second time at distance zero. The search stops as soon as the queue yields
/// a vertex whose recorded distance is still unreached, since nothing after it
/// can be reached either. A source that is not part of the graph is reported
/// as unreached and nothing is visited.
///
/// Edge weights must be non-negative. Integer sums that overflow the weight
/// type are treated as unreachable through that edge.
pub fn dijkstra<V, W>(graph: &WeightedGraph<V, W>, source: &V) -> ShortestPaths<V, W>
where
    V: Ord + Clone,
    W: Weight,
{
    let mut distances = BTreeMap::new();
    let mut predecessors = BTreeMap::new();
    let mut finalized = BTreeSet::new();
    let mut visited = Vec::new();
    let mut queue = BinaryHeap::with_capacity(graph.vertex_count() + 1);

    for vertex in graph.vertices() {
        distances.insert(vertex.clone(), Distance::Unreached);
        predecessors.insert(vertex.clone(), None);
        queue.push(QueueEntry::new(vertex, Distance::Unreached));
    }

    if graph.contains_vertex(source) {
        distances.insert(source.clone(), Distance::Finite(W::ZERO));
        queue.push(QueueEntry::new(source.clone(), Distance::Finite(W::ZERO)));
    } else {
        debug!("source vertex is not in the graph; nothing is reachable");
        distances.insert(source.clone(), Distance::Unreached);
        predecessors.insert(source.clone(), None);
    }

    debug!(vertices = graph.vertex_count(), "running dijkstra");

    while let Some(entry) = queue.pop() {
        let current = entry.vertex;
        let current_distance = match distances.get(&current) {
            Some(Distance::Finite(distance)) => *distance,
            _ => break,
        };

        if !finalized.insert(current.clone()) {
            continue;
        }
        visited.push(current.clone());

        for (neighbor, weight) in graph.edges_from(&current) {
            // A sum past the weight type's range can never be shorter.
            let Some(sum) = current_distance.checked_add(weight) else {
                continue;
            };
            let candidate = Distance::Finite(sum);
            let known = distances
                .get(neighbor)
                .copied()
                .unwrap_or(Distance::Unreached);

            if candidate.total_cmp(&known) == Ordering::Less {
                distances.insert(neighbor.clone(), candidate);
                predecessors.insert(neighbor.clone(), Some(current.clone()));
                queue.push(QueueEntry::new(neighbor.clone(), candidate));
            }
        }
    }

    debug!(visited = visited.len(), "dijkstra finished");

    ShortestPaths {
        source: source.clone(),
        distances,
        predecessors,
        visited,
    }
}

/// Order in which the search queue releases entries: smaller distance first,
/// lower vertex id on ties.
fn queue_order<V: Ord, W: Weight>(a: &QueueEntry<V, W>, b: &QueueEntry<V, W>) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.vertex.cmp(&b.vertex))
}

#[derive(Debug, Clone)]
struct QueueEntry<V, W> {
    vertex: V,
    distance: Distance<W>,
}

impl<V, W> QueueEntry<V, W> {
    fn new(vertex: V, distance: Distance<W>) -> Self {
        Self { vertex, distance }
    }
}

impl<V: Ord, W: Weight> Ord for QueueEntry<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap.
        queue_order(other, self)
    }
}

impl<V: Ord, W: Weight> PartialOrd for QueueEntry<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord, W: Weight> PartialEq for QueueEntry<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Ord, W: Weight> Eq for QueueEntry<V, W> {}
