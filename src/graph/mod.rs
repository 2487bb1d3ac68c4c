//! Graph storage and algorithms.
//!
//! - `matrix_graph`: the dense adjacency-matrix graph and its algorithms
//! - `config`: construction settings
//! - `weight`: the edge weight abstraction
//! - `generate`: random instances for demos and tests (feature `random`)

pub(crate) mod access;
pub mod config;
#[cfg(feature = "random")]
pub mod generate;
pub mod matrix_graph;
pub mod weight;

pub use config::{GraphConfig, DEFAULT_CAPACITY, DEFAULT_GROWTH_INCREMENT};
pub use matrix_graph::{
    Bfs, DepthFirst, Dfs, Edges, MatrixGraph, Neighbors, ShortestPaths, VertexListing,
};
pub use weight::Weight;
