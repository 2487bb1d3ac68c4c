use densegraph::{GraphError, MatrixGraph};

/// Five vertices labelled 1..=5 at positions 0..=4, wired as in the classic demo.
fn demo_graph() -> MatrixGraph<i32> {
    let mut graph = MatrixGraph::with_capacity(5);
    for label in 1..=5 {
        graph.add_vertex(label);
    }
    graph.add_edge(0, 4, 100);
    graph.add_edge(0, 3, 30);
    graph.add_edge(0, 1, 10);
    graph.add_edge(1, 2, 50);
    graph.add_edge(2, 4, 10);
    graph.add_edge(2, 3, 20);
    graph.add_edge(3, 4, 60);
    graph
}

#[test]
fn demo_graph_shape() {
    let graph = demo_graph();
    assert_eq!(graph.order(), 5);
    assert_eq!(graph.edge_length(), 7);
    assert_eq!(graph.capacity(), 5);
    assert_eq!(graph.edges().count(), 7);
}

#[test]
fn demo_dijkstra_beats_direct_and_two_hop_routes() {
    let graph = demo_graph();
    let paths = graph.dijkstra(0, 4).unwrap();

    // 0-3-2-4 = 30 + 20 + 10.
    let best = paths.distance(4).unwrap();
    assert_eq!(best, 60);
    assert!(best < 100, "direct edge");
    assert!(best < 30 + 60, "via 3");
    assert!(best < 10 + 50 + 10, "via 1 and 2");

    assert_eq!(paths.distances(), &[Some(0), Some(10), Some(50), Some(30), Some(60)]);
    assert_eq!(paths.predecessors(), &[0, 0, 3, 0, 2]);
    assert_eq!(paths.path_to(4), Some(vec![0, 3, 2, 4]));
}

#[test]
fn demo_shortest_path_matches_full_run() {
    let graph = demo_graph();
    let full = graph.dijkstra(0, 4).unwrap();
    for target in 0..graph.order() {
        let (d, path) = graph.shortest_path(0, target).unwrap().unwrap();
        assert_eq!(Some(d), full.distance(target));
        assert_eq!(Some(path), full.path_to(target));
    }
}

#[test]
fn demo_traversals() {
    let mut graph = demo_graph();

    let dfs = graph.dfs(true);
    assert_eq!(dfs.order.len(), 5);
    assert!(dfs.is_connected());
    assert!(graph.has_connected_vertices());
    assert_eq!(graph.connected_count(), 5);

    let mut bfs = graph.bfs();
    assert_eq!(bfs, vec![0, 1, 3, 4, 2]);
    bfs.sort_unstable();
    assert_eq!(bfs, vec![0, 1, 2, 3, 4]);
}

#[test]
fn demo_listing_has_no_isolated_vertices() {
    let mut graph = demo_graph();
    let listing = graph.plain_listing();
    assert!(listing.iter().all(|l| !l.is_isolated()));
    assert_eq!(graph.isolated_count(), 0);
    assert_eq!(listing[0].neighbors, vec![(1, 10), (3, 30), (4, 100)]);
}

#[test]
fn delete_edge_then_query() {
    let mut graph = demo_graph();
    let before = graph.edge_length();
    assert_eq!(graph.delete_edge(0, 4), Some(100));
    assert!(!graph.has_edge(0, 4));
    assert!(!graph.has_edge(4, 0));
    assert_eq!(graph.edge_length(), before - 1);

    // Removing the direct edge does not change the best route.
    assert_eq!(graph.dijkstra(0, 4).unwrap().distance(4), Some(60));
}

#[test]
fn growth_past_initial_capacity_keeps_payloads() {
    let mut graph: MatrixGraph<String> = MatrixGraph::with_capacity(3);
    for i in 0..40 {
        graph.add_vertex(format!("v{i}"));
        if i > 0 {
            graph.add_edge(i - 1, i, u32::try_from(i).unwrap());
        }
    }

    assert_eq!(graph.order(), 40);
    assert!(graph.capacity() >= 40);
    for k in 0..40 {
        assert_eq!(graph.vertex(k).unwrap(), &format!("v{k}"));
    }
    for i in 1..40 {
        assert_eq!(graph.weight(i - 1, i), Some(u32::try_from(i).unwrap()));
    }
    assert_eq!(graph.bfs().len(), 40);
}

#[test]
fn out_of_range_positions_are_errors() {
    let mut graph = demo_graph();
    assert_eq!(
        graph.vertex(5),
        Err(GraphError::OutOfBounds { position: 5, order: 5 })
    );
    assert!(graph.delete_vertex(17).is_err());
    assert!(graph.bfs_from(5).is_err());
    assert!(graph.dijkstra(0, 5).is_err());
}

#[test]
fn delete_vertex_renumbers_routes() {
    let mut graph = demo_graph();
    // Drop vertex 3 (label 4): the best 0 -> old 4 route becomes 0-1-2-4 = 70.
    assert_eq!(graph.delete_vertex(3), Ok(4));
    assert_eq!(graph.vertices(), &[1, 2, 3, 5]);
    assert_eq!(graph.edge_length(), 4);

    let paths = graph.dijkstra(0, 3).unwrap();
    assert_eq!(paths.distance(3), Some(70));
    assert_eq!(paths.path_to(3), Some(vec![0, 1, 2, 3]));
}
