use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::geo::{Coordinate, NodeId};
use crate::map::{FootwayGraph, FootwayMap};
use crate::nearest::{find_nearest_nodes, NearestNodes};
use crate::path::{dijkstra, ShortestPaths};

/// High-level route planning request between two reference points, typically
/// the locations of two points of interest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub start: Coordinate,
    pub goal: Coordinate,
}

impl RouteRequest {
    pub fn new(start: Coordinate, goal: Coordinate) -> Self {
        Self { start, goal }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    /// Footway node nearest to the requested start.
    pub start: Coordinate,
    /// Footway node nearest to the requested goal.
    pub goal: Coordinate,
    /// Walking distance, `None` when the goal cannot be reached.
    pub distance: Option<f64>,
    /// Node ids from start to goal; empty when unreachable.
    pub steps: Vec<NodeId>,
    /// Nodes finalized by the search, in order.
    pub visited: Vec<NodeId>,
}

impl RoutePlan {
    /// Assemble a plan from a finished search rooted at `nearest.start`.
    pub fn from_search(nearest: NearestNodes, search: &ShortestPaths<NodeId, f64>) -> Self {
        let distance = search.distance(&nearest.goal.id).finite();
        let steps = search.path_to(&nearest.goal.id).unwrap_or_default();

        Self {
            start: nearest.start,
            goal: nearest.goal,
            distance,
            steps,
            visited: search.visited().to_vec(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Snap both request points onto the footway network and compute the shortest
/// walk between them.
///
/// An unreachable goal is not an error; the returned plan has no distance and
/// no steps.
pub fn plan_route(
    map: &FootwayMap,
    graph: &FootwayGraph,
    request: &RouteRequest,
) -> Result<RoutePlan> {
    let nearest = find_nearest_nodes(&request.start, &request.goal, &map.footways, &map.nodes)?;
    let search = dijkstra(graph, &nearest.start.id);
    let plan = RoutePlan::from_search(nearest, &search);

    debug!(
        start = plan.start.id,
        goal = plan.goal.id,
        reachable = plan.is_reachable(),
        hops = plan.hop_count(),
        "planned route"
    );

    Ok(plan)
}
