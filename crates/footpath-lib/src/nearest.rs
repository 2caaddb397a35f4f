use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::{Coordinate, NodeId};
use crate::map::Footway;

/// Footway nodes closest to a start and a goal reference point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearestNodes {
    pub start: Coordinate,
    pub goal: Coordinate,
}

/// Find the footway node nearest to `start` and the one nearest to `goal`.
///
/// Every node of every footway is scanned in order, including nodes shared by
/// several footways. A candidate only replaces the current best when it is
/// strictly closer, so the first node found wins ties.
///
/// Fails with [`Error::NoCandidates`] when the footways contain no nodes, and
/// with [`Error::UnknownNode`] when a footway names a node missing from
/// `nodes`.
pub fn find_nearest_nodes(
    start: &Coordinate,
    goal: &Coordinate,
    footways: &[Footway],
    nodes: &BTreeMap<NodeId, Coordinate>,
) -> Result<NearestNodes> {
    let mut nearest_start: Option<(f64, Coordinate)> = None;
    let mut nearest_goal: Option<(f64, Coordinate)> = None;

    for footway in footways {
        for id in &footway.nodes {
            let candidate = nodes.get(id).ok_or(Error::UnknownNode { id: *id })?;

            let to_start = start.distance_to(candidate);
            if is_closer(to_start, nearest_start.as_ref()) {
                nearest_start = Some((to_start, *candidate));
            }

            let to_goal = goal.distance_to(candidate);
            if is_closer(to_goal, nearest_goal.as_ref()) {
                nearest_goal = Some((to_goal, *candidate));
            }
        }
    }

    let (Some((start_distance, start_node)), Some((goal_distance, goal_node))) =
        (nearest_start, nearest_goal)
    else {
        return Err(Error::NoCandidates);
    };

    debug!(
        start = start_node.id,
        start_distance,
        goal = goal_node.id,
        goal_distance,
        "resolved nearest footway nodes"
    );

    Ok(NearestNodes {
        start: start_node,
        goal: goal_node,
    })
}

fn is_closer(distance: f64, best: Option<&(f64, Coordinate)>) -> bool {
    match best {
        Some((best_distance, _)) => distance < *best_distance,
        None => true,
    }
}
