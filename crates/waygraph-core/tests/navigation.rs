//! End-to-end tests for building a graph, searching it and consuming the path

use std::collections::HashSet;

use waygraph_core::config::EngineConfig;
use waygraph_core::graph::{Graph, TraversalOrder};
use waygraph_core::persistence::{load_graph, save_graph};
use waygraph_core::GraphError;

/// A 4x4 grid with unit moves in all four directions; cell (1,1) is a bog
/// that costs 20 to enter.
fn grid() -> Graph<(i32, i32)> {
    let mut g = Graph::new();
    for x in 0..4 {
        for y in 0..4 {
            if x + 1 < 4 {
                g.add_undirected_edge((x, y), (x + 1, y), 1.0).unwrap();
            }
            if y + 1 < 4 {
                g.add_undirected_edge((x, y), (x, y + 1), 1.0).unwrap();
            }
        }
    }
    g.set_heuristic(&(1, 1), 20.0).unwrap();
    g
}

#[test]
fn test_grid_search_avoids_bog() {
    let g = grid();
    let (path, cost) = g.search(&(0, 0), &(3, 3)).unwrap();
    assert_eq!(cost, 6.0);
    assert_eq!(path.length(), 6);
    assert!(!path.contains(&(1, 1)));
    assert!((path.route_cost() - cost).abs() < 1e-9);
    assert_eq!(path.max_single_cost(), 0.0);
}

#[test]
fn test_consume_path_in_ticks() {
    let g = grid();
    let (path, _) = g.search(&(0, 0), &(3, 3)).unwrap();

    let mut at = *path.start().id();
    let mut ticks = 0;
    while at != *path.end().id() {
        let (reached, taken) = path.advance_steps(&at, 2).unwrap();
        assert!(taken <= 2);
        at = *reached.id();
        ticks += 1;
    }
    assert_eq!(ticks, 3);
}

#[test]
fn test_every_path_vertex_but_end_has_a_successor() {
    let g = grid();
    let (path, _) = g.search(&(3, 0), &(0, 3)).unwrap();
    let vertices: Vec<_> = path.vertices().collect();
    for v in &vertices[..vertices.len() - 1] {
        assert!(path.next(v.id()).is_ok());
    }
    assert!(matches!(
        path.next(path.end().id()),
        Err(GraphError::EndOfPath { .. })
    ));
}

#[test]
fn test_full_traversal_covers_islands() {
    let mut g = grid();
    g.add_undirected_edge((10, 10), (11, 10), 1.0).unwrap();
    for order in [TraversalOrder::BreadthFirst, TraversalOrder::DepthFirst] {
        let seen: HashSet<_> = g
            .traverse(&(0, 0), order, true)
            .unwrap()
            .map(|v| *v.id())
            .collect();
        assert_eq!(seen.len(), 18);
    }
    let reachable = g
        .traverse(&(0, 0), TraversalOrder::BreadthFirst, false)
        .unwrap()
        .count();
    assert_eq!(reachable, 16);
}

#[test]
fn test_frontier_respects_bog() {
    let g = grid();
    let found = g.affordable_vertices(&(0, 0), 5.0).unwrap();
    assert!(found.iter().all(|a| a.cost <= 5.0));
    assert!(found.iter().all(|a| *a.vertex.id() != (1, 1)));
    assert_eq!(found[0].cost, 0.0);
}

#[test]
fn test_persisted_graph_searches_the_same() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("roads.json");

    let mut g: Graph<String> = Graph::with_config(&EngineConfig::default().graph);
    g.add_edge("depot".into(), "mill".into(), 4.0).unwrap();
    g.add_edge("mill".into(), "market".into(), 2.0).unwrap();
    g.add_edge("depot".into(), "market".into(), 9.0).unwrap();
    save_graph(&file, &g).unwrap();

    let loaded: Graph<String> = load_graph(&file).unwrap();
    let (path, cost) = loaded.search(&"depot".into(), &"market".into()).unwrap();
    assert_eq!(cost, 6.0);
    let route: Vec<&str> = path.vertices().map(|v| v.id().as_str()).collect();
    assert_eq!(route, vec!["depot", "mill", "market"]);
}
