use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::geo::{Coordinate, DistanceUnit, NodeId};
use crate::graph::WeightedGraph;

/// Graph over map nodes weighted by walking distance.
pub type FootwayGraph = WeightedGraph<NodeId, f64>;

/// A walkable route through an ordered list of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footway {
    pub id: i64,
    pub nodes: Vec<NodeId>,
}

impl Footway {
    pub fn new(id: i64, nodes: Vec<NodeId>) -> Self {
        Self { id, nodes }
    }
}

/// In-memory map handed over by a loader: the node table plus footways.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FootwayMap {
    pub nodes: BTreeMap<NodeId, Coordinate>,
    pub footways: Vec<Footway>,
}

impl FootwayMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any node with the same id.
    pub fn insert_node(&mut self, coordinate: Coordinate) {
        self.nodes.insert(coordinate.id, coordinate);
    }

    pub fn push_footway(&mut self, footway: Footway) {
        self.footways.push(footway);
    }

    /// Lookup a node by identifier.
    pub fn node(&self, id: NodeId) -> Option<&Coordinate> {
        self.nodes.get(&id)
    }

    /// Lookup a node, failing when the id is not in the node table.
    pub fn resolve(&self, id: NodeId) -> Result<&Coordinate> {
        self.node(id).ok_or(Error::UnknownNode { id })
    }
}

/// Options controlling how a [`FootwayGraph`] is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphBuildOptions {
    /// Unit for edge weights.
    pub unit: DistanceUnit,
    /// Add the reverse edge for every footway segment.
    pub bidirectional: bool,
}

impl Default for GraphBuildOptions {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::Miles,
            bidirectional: true,
        }
    }
}

/// Build the default walking graph: miles, footways walkable both ways.
pub fn build_graph(map: &FootwayMap) -> Result<FootwayGraph> {
    build_graph_with(map, &GraphBuildOptions::default())
}

/// Build a walking graph from `map`.
///
/// Every node in the node table becomes a vertex. Consecutive nodes of each
/// footway are joined by an edge weighted with their great-circle distance.
pub fn build_graph_with(map: &FootwayMap, options: &GraphBuildOptions) -> Result<FootwayGraph> {
    let mut graph = FootwayGraph::new();

    for &id in map.nodes.keys() {
        graph.add_vertex(id);
    }

    for footway in &map.footways {
        if footway.nodes.len() < 2 {
            warn!(
                footway = footway.id,
                nodes = footway.nodes.len(),
                "footway has no segments"
            );
            continue;
        }

        for pair in footway.nodes.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let distance = map
                .resolve(from)?
                .distance_in(map.resolve(to)?, options.unit);

            graph.add_edge(from, to, distance);
            if options.bidirectional {
                graph.add_edge(to, from, distance);
            }
        }
    }

    info!(
        nodes = map.nodes.len(),
        footways = map.footways.len(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "built footway graph"
    );

    Ok(graph)
}
