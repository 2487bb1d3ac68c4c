//! A dense adjacency-matrix undirected graph.
//!
//! This module is vertically split:
//! - `storage`: the contiguous square weight matrix
//! - `iter`: neighbor and edge iteration
//! - `traversal`: depth-first and breadth-first walks
//! - `shortest_path`: Dijkstra over the matrix
//! - `tests`: module-local tests

use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graph::{GraphConfig, Weight};

mod iter;
mod shortest_path;
mod storage;
mod traversal;

pub use iter::{Edges, Neighbors};
pub use shortest_path::ShortestPaths;
pub use traversal::{Bfs, DepthFirst, Dfs};

use storage::WeightMatrix;

/// An undirected weighted graph stored as a dense adjacency matrix.
///
/// Vertices are addressed by their insertion position. Every stored vertex carries a
/// zero-weight self cell, so `has_edge(v, v)` holds and `v` appears in its own
/// neighbor list.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | \(O(n^2)\) when the matrix grows |
/// | `add_edge` / `delete_edge` | \(O(1)\) | Writes both symmetric cells |
/// | `has_edge` / `weight` | \(O(1)\) | Single cell read |
/// | `delete_vertex` | \(O(n^2)\) | Compacts the matrix in place |
/// | `neighbors` | \(O(n)\) | Lazy scan of one row |
/// | `dfs` / `bfs` | \(O(n^2)\) | One row scan per visited vertex |
/// | `dijkstra` | \(O(n^2)\) | Linear minimum selection |
#[derive(Clone, Debug)]
pub struct MatrixGraph<T, W = u32> {
    vertices: Vec<T>,
    matrix: WeightMatrix<W>,
    edges: usize,
    config: GraphConfig,
    isolated: Vec<usize>,
    connected: Vec<usize>,
}

/// One vertex of a [`MatrixGraph::plain_listing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexListing<W> {
    /// Position of the listed vertex.
    pub position: usize,
    /// Neighbors other than the vertex itself, with edge weights, ascending.
    pub neighbors: Vec<(usize, W)>,
}

impl<W> VertexListing<W> {
    /// Returns `true` if the vertex has no neighbor besides itself.
    pub fn is_isolated(&self) -> bool {
        self.neighbors.is_empty()
    }
}

impl<T, W: Weight> MatrixGraph<T, W> {
    /// Creates an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates an empty graph whose matrix starts at `capacity x capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(GraphConfig::default().initial_capacity(capacity))
    }

    /// Creates an empty graph from explicit storage settings.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: Vec::with_capacity(config.initial_capacity),
            matrix: WeightMatrix::new(config.initial_capacity),
            edges: 0,
            config,
            isolated: Vec::new(),
            connected: Vec::new(),
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edge counter: `add_edge` calls minus `delete_edge` calls.
    ///
    /// Adding the same pair twice counts twice. The counter saturates at zero.
    #[inline]
    pub fn edge_length(&self) -> usize {
        self.edges
    }

    /// Current matrix side.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.matrix.side()
    }

    /// The storage settings this graph was built with.
    #[inline]
    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// Adds a vertex and returns its position, which equals `order()` before the call.
    pub fn add_vertex(&mut self, vertex: T) -> usize {
        let position = self.order();
        if position >= self.matrix.side() {
            self.grow();
        }
        self.vertices.push(vertex);
        self.matrix.set(position, position, Some(W::zero()));
        position
    }

    /// Adds a vertex, then an edge `from - to`.
    ///
    /// # Panics
    /// Panics if `from` or `to` is out of bounds after the vertex is added.
    pub fn add(&mut self, vertex: T, from: usize, to: usize, weight: W) -> usize {
        let position = self.add_vertex(vertex);
        self.add_edge(from, to, weight);
        position
    }

    /// Sets the weight of the undirected edge `from - to` and returns the previous weight.
    ///
    /// The edge counter is incremented even if the edge already existed. A self pair
    /// only counts: the diagonal stays at zero.
    ///
    /// # Panics
    /// Panics if `from` or `to` is out of bounds.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Option<W> {
        self.assert_vertex(from);
        self.assert_vertex(to);
        self.edges += 1;
        if from == to {
            return self.matrix.get(from, to);
        }
        self.matrix.set_symmetric(from, to, Some(weight))
    }

    /// Removes the undirected edge `from - to` and returns its weight, if any.
    ///
    /// The edge counter is decremented even if no edge existed. A self pair only
    /// counts: the diagonal stays at zero and `None` is returned.
    ///
    /// # Panics
    /// Panics if `from` or `to` is out of bounds.
    pub fn delete_edge(&mut self, from: usize, to: usize) -> Option<W> {
        self.assert_vertex(from);
        self.assert_vertex(to);
        if self.edges == 0 {
            warn!(from, to, "edge counter already zero; delete_edge leaves it at zero");
        }
        self.edges = self.edges.saturating_sub(1);
        if from == to {
            return None;
        }
        self.matrix.set_symmetric(from, to, None)
    }

    /// Removes the vertex at `position` and returns its payload.
    ///
    /// Later vertices move down one position; the matrix row and column are compacted to
    /// match. The edge counter drops by the number of edges the vertex had to other
    /// vertices, and the isolated/connected accumulators are cleared since their
    /// positions no longer apply.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfBounds`] if `position >= order()`.
    pub fn delete_vertex(&mut self, position: usize) -> Result<T> {
        let order = self.order();
        GraphError::check(position, order)?;

        let incident = self.degree(position);
        self.matrix.remove(position, order);
        let vertex = self.vertices.remove(position);
        self.edges = self.edges.saturating_sub(incident);
        self.clear_tracking();

        debug!(position, incident, order = self.order(), "deleted vertex");
        Ok(vertex)
    }

    /// Returns the vertex stored at `position`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfBounds`] if `position >= order()`.
    pub fn vertex(&self, position: usize) -> Result<&T> {
        GraphError::check(position, self.order()).map(|p| &self.vertices[p])
    }

    /// Mutable access to the vertex stored at `position`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfBounds`] if `position >= order()`.
    pub fn vertex_mut(&mut self, position: usize) -> Result<&mut T> {
        let order = self.order();
        GraphError::check(position, order).map(|p| &mut self.vertices[p])
    }

    /// All vertices in position order.
    #[inline]
    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    /// Checks whether the edge `from - to` exists.
    ///
    /// # Panics
    /// Panics if `from` or `to` is out of bounds.
    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.weight(from, to).is_some()
    }

    /// Weight of the edge `from - to`, if present.
    ///
    /// # Panics
    /// Panics if `from` or `to` is out of bounds.
    #[inline]
    pub fn weight(&self, from: usize, to: usize) -> Option<W> {
        self.assert_vertex(from);
        self.assert_vertex(to);
        self.matrix.get(from, to)
    }

    /// Lazily yields every `i` with `has_edge(position, i)`, ascending.
    ///
    /// Includes `position` itself. Call again to restart.
    ///
    /// # Panics
    /// Panics if `position` is out of bounds.
    pub fn neighbors(&self, position: usize) -> Neighbors<'_, W> {
        self.assert_vertex(position);
        Neighbors::new(self.matrix.row(position, self.order()))
    }

    /// Number of neighbors other than `position` itself.
    ///
    /// # Panics
    /// Panics if `position` is out of bounds.
    pub fn degree(&self, position: usize) -> usize {
        self.neighbors(position).filter(|&v| v != position).count()
    }

    /// Yields each edge once as `(i, j, weight)` with `i < j`.
    pub fn edges(&self) -> Edges<'_, W> {
        Edges::new(&self.matrix, self.order())
    }

    /// Lists the non-self neighbors of every vertex.
    ///
    /// Vertices without any are appended to the isolated accumulator.
    pub fn plain_listing(&mut self) -> Vec<VertexListing<W>> {
        let n = self.order();
        let mut listing = Vec::with_capacity(n);
        for position in 0..n {
            let neighbors: Vec<(usize, W)> = self
                .matrix
                .row(position, n)
                .iter()
                .enumerate()
                .filter(|&(v, _)| v != position)
                .filter_map(|(v, w)| w.map(|w| (v, w)))
                .collect();
            if neighbors.is_empty() {
                self.isolated.push(position);
            }
            listing.push(VertexListing { position, neighbors });
        }
        debug!(order = n, isolated = self.isolated.len(), "plain listing");
        listing
    }

    /// Positions recorded by `plain_listing` runs as isolated.
    pub fn isolated_vertices(&self) -> &[usize] {
        &self.isolated
    }

    /// Length of the isolated accumulator.
    pub fn isolated_count(&self) -> usize {
        self.isolated.len()
    }

    /// Positions recorded by `dfs(true)` runs; may repeat.
    pub fn connected_vertices(&self) -> &[usize] {
        &self.connected
    }

    /// Length of the connected accumulator.
    pub fn connected_count(&self) -> usize {
        self.connected.len()
    }

    /// Returns `true` once a tracking DFS recorded any vertex.
    pub fn has_connected_vertices(&self) -> bool {
        !self.connected.is_empty()
    }

    /// Empties the isolated and connected accumulators.
    pub fn clear_tracking(&mut self) {
        self.isolated.clear();
        self.connected.clear();
    }

    fn grow(&mut self) {
        let from = self.matrix.side();
        self.matrix.grow(self.order(), self.config.increment());
        debug!(from, to = self.matrix.side(), order = self.order(), "grew adjacency matrix");
    }

    #[inline(always)]
    fn assert_vertex(&self, position: usize) {
        assert!(
            position < self.order(),
            "vertex {position} out of bounds for order {}",
            self.order()
        );
    }
}

impl<T, W: Weight> Default for MatrixGraph<T, W> {
    fn default() -> Self {
        Self::new()
    }
}
