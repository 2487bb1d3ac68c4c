//! # `densegraph` - Dense Matrix Graph Engine
//!
//! An in-memory, undirected, weighted graph stored as a dense adjacency matrix, together
//! with the classic algorithms built on top of it: depth-first traversal with connectivity
//! accounting, breadth-first traversal and single-source shortest paths (Dijkstra).
//!
//! ## Data Model
//!
//! - **Vertices** are caller-supplied payloads of any type `T`, addressed by the position
//!   they were inserted at.
//! - **Weights** are unsigned integers (`u32` by default); see [`graph::Weight`].
//! - **The matrix** is a single contiguous row-major buffer of `Option<W>` cells. `None`
//!   means "no edge"; the diagonal holds `Some(0)` for every stored vertex.
//! - **Capacity** is tracked separately from the vertex count and grows by a fixed
//!   increment (see [`GraphConfig`]).
//!
//! ## Invariants
//!
//! **Symmetry**: `weight(i, j) == weight(j, i)` after every mutation.
//!
//! **Square storage**: the matrix side is always `>= order()`.
//!
//! **Edge counter**: `edge_length()` moves by exactly one per `add_edge`/`delete_edge`
//! call. It does not deduplicate repeated additions of the same pair.
//!
//! ## Example
//!
//! ```rust
//! use densegraph::MatrixGraph;
//!
//! let mut graph: MatrixGraph<&str> = MatrixGraph::new();
//! let a = graph.add_vertex("a");
//! let b = graph.add_vertex("b");
//! let c = graph.add_vertex("c");
//!
//! graph.add_edge(a, b, 4);
//! graph.add_edge(b, c, 1);
//! graph.add_edge(a, c, 9);
//!
//! let paths = graph.dijkstra(a, c).unwrap();
//! assert_eq!(paths.distance(c), Some(5));
//! assert_eq!(paths.path_to(c), Some(vec![a, b, c]));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    Bfs, DepthFirst, Dfs, Edges, GraphConfig, MatrixGraph, Neighbors, ShortestPaths, VertexListing,
    Weight,
};

// Compile-time assertions for the matrix cell layout.
const _: () = {
    use core::mem;

    // Unsigned weights carry no niche, so the "no edge" tag costs one padded slot.
    assert!(mem::size_of::<Option<u32>>() == 2 * mem::size_of::<u32>());
    assert!(mem::size_of::<Option<u64>>() == 2 * mem::size_of::<u64>());

    // The default configuration is never degenerate.
    assert!(graph::DEFAULT_CAPACITY > 0);
    assert!(graph::DEFAULT_GROWTH_INCREMENT > 0);
};
