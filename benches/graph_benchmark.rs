use criterion::{black_box, criterion_group, criterion_main, Criterion};
use densegraph::{GraphConfig, MatrixGraph};
use petgraph::graph::UnGraph;

/// Binary-tree wiring with a few cross links, weights derived from positions.
fn tree_graph(size: usize) -> MatrixGraph<usize> {
    let mut graph = MatrixGraph::with_capacity(size);
    for i in 0..size {
        graph.add_vertex(i);
    }
    for i in 1..size {
        graph.add_edge(i / 2, i, (i % 17 + 1) as u32);
    }
    for i in (3..size).step_by(7) {
        graph.add_edge(i - 3, i, 40);
    }
    graph
}

fn bench_matrix_growth(c: &mut Criterion) {
    let size = 500;

    c.bench_function("matrix_graph_grow_default_increment", |b| {
        b.iter(|| {
            let mut graph: MatrixGraph<usize> = MatrixGraph::new();
            for i in 0..size {
                graph.add_vertex(i);
            }
            black_box(graph.capacity())
        });
    });

    c.bench_function("matrix_graph_grow_presized", |b| {
        b.iter(|| {
            let config = GraphConfig::default().initial_capacity(size);
            let mut graph: MatrixGraph<usize> = MatrixGraph::with_config(config);
            for i in 0..size {
                graph.add_vertex(i);
            }
            black_box(graph.capacity())
        });
    });
}

fn bench_matrix_remove(c: &mut Criterion) {
    let size = 300;
    let graph = tree_graph(size);

    c.bench_function("matrix_graph_delete_middle_vertex", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut g| black_box(g.delete_vertex(size / 2)),
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_traversals(c: &mut Criterion) {
    let size = 1000;
    let graph = tree_graph(size);

    c.bench_function("matrix_graph_bfs", |b| {
        b.iter(|| black_box(graph.bfs().len()));
    });

    c.bench_function("matrix_graph_dfs", |b| {
        b.iter(|| black_box(graph.dfs_iter().count()));
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let size = 1000;
    let graph = tree_graph(size);

    c.bench_function("matrix_graph_dijkstra", |b| {
        b.iter(|| black_box(graph.dijkstra(0, size - 1).map(|p| p.distance(size - 1))));
    });

    c.bench_function("matrix_graph_shortest_path_early_exit", |b| {
        b.iter(|| black_box(graph.shortest_path(0, 3)));
    });

    let mut oracle: UnGraph<(), u32> = UnGraph::new_undirected();
    let nodes: Vec<_> = (0..size).map(|_| oracle.add_node(())).collect();
    for (a, b, w) in graph.edges() {
        oracle.add_edge(nodes[a], nodes[b], w);
    }

    c.bench_function("petgraph_dijkstra", |b| {
        b.iter(|| black_box(petgraph::algo::dijkstra(&oracle, nodes[0], None, |e| *e.weight()).len()));
    });
}

criterion_group!(
    benches,
    bench_matrix_growth,
    bench_matrix_remove,
    bench_traversals,
    bench_dijkstra
);
criterion_main!(benches);
