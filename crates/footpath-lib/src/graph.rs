use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;
use std::io::Write;
use std::ops::Add;

use crate::error::Result;

/// Edge weight usable by [`WeightedGraph`] and the shortest-path search.
///
/// Weights only need to add and compare. Floating point weights are compared
/// with the IEEE total order so they can live inside a binary heap.
pub trait Weight: Copy + Add<Output = Self> {
    /// Additive identity, used as the distance from a source to itself.
    const ZERO: Self;

    /// Total ordering between two weights.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Sum of two weights, or `None` when it does not fit the type.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$ty>::checked_add(self, other)
                }
            }
        )*
    };
}

integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Weight for f32 {
    const ZERO: Self = 0.0;

    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }

    fn checked_add(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

impl Weight for f64 {
    const ZERO: Self = 0.0;

    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }

    fn checked_add(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

/// Directed weighted graph keyed by an ordered vertex identifier.
///
/// Each vertex owns a map from neighbour to edge weight, so there is at most
/// one weight per ordered `(from, to)` pair. Vertices and neighbours iterate
/// in ascending key order. Self-edges are allowed.
///
/// Two graphs compare equal when their adjacency and both counters match.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph<V, W> {
    adjacency: BTreeMap<V, BTreeMap<V, W>>,
    vertex_count: usize,
    edge_count: usize,
}

impl<V, W> Default for WeightedGraph<V, W> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            vertex_count: 0,
            edge_count: 0,
        }
    }
}

impl<V: Ord + Clone, W: Weight> WeightedGraph<V, W> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices currently in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of directed edges currently in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Add `vertex` with no outgoing edges.
    ///
    /// Returns `false` and leaves the graph untouched when the vertex already
    /// exists.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }

        self.adjacency.insert(vertex, BTreeMap::new());
        self.vertex_count += 1;
        true
    }

    /// Add or overwrite the directed edge `from -> to`.
    ///
    /// Returns `false` without mutating anything when either endpoint is not a
    /// vertex. The edge counter only moves on the first insertion of a pair.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> bool {
        if !self.adjacency.contains_key(&to) {
            return false;
        }
        let Some(neighbors) = self.adjacency.get_mut(&from) else {
            return false;
        };

        if neighbors.insert(to, weight).is_none() {
            self.edge_count += 1;
        }
        true
    }

    /// Weight of the directed edge `from -> to`, if it exists.
    pub fn weight(&self, from: &V, to: &V) -> Option<W> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Outgoing neighbours of `vertex` in ascending order.
    ///
    /// Unknown vertices simply have no neighbours.
    pub fn neighbors(&self, vertex: &V) -> BTreeSet<V> {
        self.adjacency
            .get(vertex)
            .map(|targets| targets.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Outgoing `(neighbour, weight)` pairs of `vertex` in ascending neighbour
    /// order.
    pub fn edges_from<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, W)> + 'a {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(target, weight)| (target, *weight)))
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Write a human readable listing of the graph, for debugging.
    pub fn dump<O: Write>(&self, out: &mut O) -> Result<()>
    where
        V: Display,
        W: Display,
    {
        writeln!(out, "vertices: {}", self.vertex_count)?;
        writeln!(out, "edges: {}", self.edge_count)?;

        for (vertex, targets) in &self.adjacency {
            write!(out, "{vertex} ->")?;
            for (target, weight) in targets {
                write!(out, " ({target}, {weight})")?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}
