//! Footpath library entry points.
//!
//! This crate exposes a generic weighted graph, Dijkstra's shortest-path
//! search, and helpers to build a walking graph from map nodes and footways,
//! snap arbitrary points onto that network, and plan routes between them.
//! Loading maps from disk and presenting routes are left to callers.
//!

#![deny(warnings)]

pub mod error;
pub mod geo;
pub mod graph;
pub mod map;
pub mod nearest;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use geo::{distance_miles, haversine, Coordinate, DistanceUnit, NodeId};
pub use graph::{Weight, WeightedGraph};
pub use map::{build_graph, build_graph_with, Footway, FootwayGraph, FootwayMap, GraphBuildOptions};
pub use nearest::{find_nearest_nodes, NearestNodes};
pub use path::{dijkstra, Distance, ShortestPaths};
pub use routing::{plan_route, RoutePlan, RouteRequest};
