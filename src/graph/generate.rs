//! Random graph instances.
//!
//! Built only through the public `MatrixGraph` API.

use rand::Rng;

use crate::graph::MatrixGraph;

/// Smallest vertex count produced by [`random_graph`].
pub const MIN_VERTICES: usize = 5;
/// Exclusive upper bound on the vertex count produced by [`random_graph`].
pub const MAX_VERTICES: usize = 10;
/// Largest edge weight produced by [`random_graph`].
pub const MAX_WEIGHT: u32 = 25;

/// Builds a random graph of 5 to 9 vertices labelled `"0"`, `"1"`, ...
///
/// Each vertex makes a random number of attempts to connect to a random vertex; an
/// attempt adds an edge weighted `1..=25` only when the pair is not connected yet.
/// Self pairs are always connected, so no self edges are added.
pub fn random_graph<R: Rng + ?Sized>(rng: &mut R) -> MatrixGraph<String> {
    let order = rng.gen_range(MIN_VERTICES..MAX_VERTICES);
    let mut graph = MatrixGraph::with_capacity(order);
    for label in 0..order {
        graph.add_vertex(label.to_string());
    }

    for from in 0..order {
        let attempts = rng.gen_range(0..=order);
        for _ in 0..attempts {
            let to = rng.gen_range(0..order);
            if !graph.has_edge(from, to) {
                graph.add_edge(from, to, rng.gen_range(1..=MAX_WEIGHT));
            }
        }
    }

    graph
}

/// [`random_graph`] using the thread-local RNG.
pub fn random_graph_default() -> MatrixGraph<String> {
    random_graph(&mut rand::thread_rng())
}
