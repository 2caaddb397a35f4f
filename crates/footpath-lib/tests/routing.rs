mod common;

use footpath_lib::{
    build_graph, dijkstra, plan_route, Coordinate, Error, FootwayMap, NearestNodes, RoutePlan,
    RouteRequest,
};

use common::campus_map;

#[test]
fn plans_route_between_nearest_nodes() {
    let map = campus_map();
    let graph = build_graph(&map).expect("graph builds");
    let request = RouteRequest::new(
        Coordinate::new(0, 41.0001, -87.0000),
        Coordinate::new(0, 41.0021, -87.0011),
    );

    let plan = plan_route(&map, &graph, &request).expect("route planned");

    assert_eq!(plan.start.id, 1);
    assert_eq!(plan.goal.id, 4);
    assert!(plan.is_reachable());
    assert_eq!(plan.steps, vec![1, 2, 3, 4]);
    assert_eq!(plan.hop_count(), 3);
    assert_eq!(plan.visited.first(), Some(&1));

    let expected: f64 = plan
        .steps
        .windows(2)
        .map(|pair| graph.weight(&pair[0], &pair[1]).expect("edge on path"))
        .sum();
    let distance = plan.distance.expect("reachable");
    assert!((distance - expected).abs() < 1e-12);
}

#[test]
fn unreachable_goal_is_not_an_error() {
    let map = campus_map();
    let graph = build_graph(&map).expect("graph builds");
    let request = RouteRequest::new(
        Coordinate::new(0, 41.0001, -87.0000),
        Coordinate::new(0, 41.0110, -87.0100),
    );

    let plan = plan_route(&map, &graph, &request).expect("planning succeeds");

    assert_eq!(plan.goal.id, 6);
    assert!(!plan.is_reachable());
    assert_eq!(plan.distance, None);
    assert!(plan.steps.is_empty());
    assert_eq!(plan.hop_count(), 0);
    assert!(!plan.visited.contains(&6));
}

#[test]
fn same_start_and_goal_is_a_zero_length_route() {
    let map = campus_map();
    let graph = build_graph(&map).expect("graph builds");
    let point = Coordinate::new(0, 41.002, -87.000);

    let plan = plan_route(&map, &graph, &RouteRequest::new(point, point)).expect("route");

    assert_eq!(plan.distance, Some(0.0));
    assert_eq!(plan.steps, vec![3]);
    assert_eq!(plan.hop_count(), 0);
}

#[test]
fn map_without_footways_has_no_candidates() {
    let mut map = FootwayMap::new();
    map.insert_node(Coordinate::new(1, 41.0, -87.0));
    let graph = build_graph(&map).expect("graph builds");
    let point = Coordinate::new(0, 41.0, -87.0);

    let error = plan_route(&map, &graph, &RouteRequest::new(point, point))
        .expect_err("nothing to snap to");
    assert!(matches!(error, Error::NoCandidates));
}

#[test]
fn plan_matches_raw_search() {
    let map = campus_map();
    let graph = build_graph(&map).expect("graph builds");
    let nearest = NearestNodes {
        start: map.nodes[&4],
        goal: map.nodes[&1],
    };

    let search = dijkstra(&graph, &4);
    let plan = RoutePlan::from_search(nearest, &search);

    assert_eq!(plan.steps, vec![4, 3, 2, 1]);
    assert_eq!(plan.distance, search.distance(&1).finite());
    assert_eq!(plan.visited, search.visited());
}

#[test]
fn plan_serializes_for_presentation() {
    let map = campus_map();
    let graph = build_graph(&map).expect("graph builds");
    let request = RouteRequest::new(
        Coordinate::new(0, 41.0001, -87.0000),
        Coordinate::new(0, 41.0110, -87.0100),
    );
    let plan = plan_route(&map, &graph, &request).expect("planning succeeds");

    let json = serde_json::to_value(&plan).expect("serialize plan");
    assert_eq!(json["start"]["id"], 1);
    assert_eq!(json["goal"]["id"], 6);
    assert!(json["distance"].is_null());
    assert_eq!(json["steps"].as_array().map(Vec::len), Some(0));
}
