#![allow(dead_code)]

use footpath_lib::{Coordinate, Footway, FootwayMap, WeightedGraph};

/// Small campus-like map.
///
/// Footway 10 runs 1 -> 2 -> 3 northwards, footway 20 turns west 3 -> 4, and
/// footway 30 is a detached path 5 -> 6. Node 7 is in the node table but on no
/// footway.
pub fn campus_map() -> FootwayMap {
    let mut map = FootwayMap::new();
    for coordinate in [
        Coordinate::new(1, 41.000, -87.000),
        Coordinate::new(2, 41.001, -87.000),
        Coordinate::new(3, 41.002, -87.000),
        Coordinate::new(4, 41.002, -87.001),
        Coordinate::new(5, 41.010, -87.010),
        Coordinate::new(6, 41.011, -87.010),
        Coordinate::new(7, 40.000, -86.000),
    ] {
        map.insert_node(coordinate);
    }

    map.push_footway(Footway::new(10, vec![1, 2, 3]));
    map.push_footway(Footway::new(20, vec![3, 4]));
    map.push_footway(Footway::new(30, vec![5, 6]));
    map
}

/// Add `(from, to, weight)` in both directions.
pub fn add_undirected(graph: &mut WeightedGraph<i64, i64>, from: i64, to: i64, weight: i64) {
    assert!(graph.add_edge(from, to, weight));
    assert!(graph.add_edge(to, from, weight));
}

/// Triangle where the direct edge 1 -> 3 is longer than the detour via 2.
pub fn detour_triangle() -> WeightedGraph<i64, i64> {
    let mut graph = WeightedGraph::new();
    for vertex in [1, 2, 3] {
        graph.add_vertex(vertex);
    }
    add_undirected(&mut graph, 1, 2, 5);
    add_undirected(&mut graph, 2, 3, 5);
    add_undirected(&mut graph, 1, 3, 20);
    graph
}

/// `width` x `height` grid with unit-ish weights that vary per row, so ties
/// and detours both occur.
pub fn grid(width: i64, height: i64) -> WeightedGraph<i64, i64> {
    let mut graph = WeightedGraph::new();
    let id = |x: i64, y: i64| y * width + x;

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(id(x, y));
        }
    }
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                add_undirected(&mut graph, id(x, y), id(x + 1, y), 1 + y % 3);
            }
            if y + 1 < height {
                add_undirected(&mut graph, id(x, y), id(x, y + 1), 2);
            }
        }
    }
    graph
}
