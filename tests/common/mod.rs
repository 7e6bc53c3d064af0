#![allow(dead_code)]

use road_graph::prelude::*;

pub fn point(x: f64, y: f64) -> GeographicPoint {
    GeographicPoint::new(x, y)
}

pub fn locations(path: &Path<GeographicPoint>) -> Vec<(f64, f64)> {
    path.iter().map(|p| (p.x, p.y)).collect()
}

pub fn closed_order(graph: &RoadGraph<GeographicPoint>) -> Vec<(f64, f64)> {
    graph
        .visited()
        .map(|node| (node.location().x, node.location().y))
        .collect()
}

/// Adds every Road in both directions, creating the Intersections as needed
pub fn two_way_graph(roads: &[((f64, f64), (f64, f64), &str, f64)]) -> RoadGraph<GeographicPoint> {
    let mut graph = RoadGraph::new();
    for &(from, to, name, length) in roads {
        let (from, to) = (GeographicPoint::from(from), GeographicPoint::from(to));
        graph.add_vertex(from);
        graph.add_vertex(to);
        graph
            .add_named_edge(from, to, name, "residential", length)
            .unwrap();
        graph
            .add_named_edge(to, from, name, "residential", length)
            .unwrap();
    }
    graph
}

/// A line of a main road with a branch:
/// ```text
///             (4,2) ------------ (7,3)
///               |                  \
/// (1,1) ----- (4,1) -- (5,1)        \
///               |         \          \
///             (4,0)       (6.5,0) -- (8,-1)
///               |                    /
///             (4,-1) ---------------
/// ```
pub fn simple_test_map() -> RoadGraph<GeographicPoint> {
    two_way_graph(&[
        ((1.0, 1.0), (4.0, 1.0), "Main street", 3.0),
        ((4.0, 1.0), (4.0, 2.0), "Jackson street", 1.0),
        ((4.0, 1.0), (4.0, 0.0), "Jackson street", 1.05),
        ((4.0, 1.0), (5.0, 1.0), "Main street", 1.1),
        ((4.0, 0.0), (4.0, -1.0), "Jackson street", 1.0),
        ((5.0, 1.0), (6.5, 0.0), "Main street", 1.9),
        ((4.0, 2.0), (7.0, 3.0), "Hill road", 3.2),
        ((6.5, 0.0), (8.0, -1.0), "Main street", 1.9),
        ((4.0, -1.0), (8.0, -1.0), "Side street", 4.0),
        ((7.0, 3.0), (8.0, -1.0), "Hill road", 4.2),
    ])
}

/// 7 Intersections, 14 Roads
pub fn pleasant_ridge_map() -> RoadGraph<GeographicPoint> {
    two_way_graph(&[
        ((1.0, -1.0), (2.0, 0.0), "Ridge road", 1.5),
        ((2.0, 0.0), (3.0, -1.0), "Ridge road", 1.5),
        ((3.0, -1.0), (3.0, 1.0), "Pleasant way", 2.0),
        ((1.0, -1.0), (2.0, -2.0), "Valley road", 1.6),
        ((2.0, -2.0), (3.0, -1.0), "Valley road", 1.6),
        ((2.0, 0.0), (1.0, 1.0), "Crest lane", 1.5),
        ((3.0, 1.0), (4.0, 0.0), "Pleasant way", 1.5),
    ])
}
