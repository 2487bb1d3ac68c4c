//! Depth-first and breadth-first traversals.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::MatrixGraph;
use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedSet;
use crate::graph::Weight;

/// Result of a full depth-first run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirst {
    /// Every vertex in the order it was first visited.
    pub order: Vec<usize>,
    /// The vertex each outer-loop walk started from, ascending.
    pub roots: Vec<usize>,
}

impl DepthFirst {
    /// Number of walks, i.e. connected components.
    pub fn component_count(&self) -> usize {
        self.roots.len()
    }

    /// Returns `true` if a single walk reached every vertex (or the graph is empty).
    pub fn is_connected(&self) -> bool {
        self.roots.len() <= 1
    }
}

/// A depth-first iterator over every vertex of the graph.
///
/// Walks start from each unvisited position in ascending order. Within a walk the
/// popped vertex is reported if new, then every unvisited neighbor is pushed in
/// ascending order, so the highest neighbor is explored first.
pub struct Dfs<'a, T, W> {
    graph: &'a MatrixGraph<T, W>,
    visited: VisitedSet,
    stack: Vec<usize>,
    next_root: usize,
    roots: Vec<usize>,
}

impl<'a, T, W: Weight> Dfs<'a, T, W> {
    /// Creates a depth-first iterator over `graph`.
    pub fn new(graph: &'a MatrixGraph<T, W>) -> Self {
        Self {
            graph,
            visited: VisitedSet::new(graph.order()),
            stack: Vec::new(),
            next_root: 0,
            roots: Vec::new(),
        }
    }

    /// Roots of the walks started so far.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Returns `true` if `position` has been reported.
    pub fn is_visited(&self, position: usize) -> bool {
        self.visited.is_visited(position)
    }

    /// Pops until a fresh vertex is found or the current walk is exhausted.
    fn step(&mut self) -> Option<usize> {
        while let Some(t) = self.stack.pop() {
            let fresh = self.visited.try_visit(t);
            for v in self.graph.neighbors(t) {
                if !self.visited.is_visited(v) {
                    self.stack.push(v);
                }
            }
            if fresh {
                trace!(vertex = t, "dfs visit");
                return Some(t);
            }
        }
        None
    }

    /// Starts a walk at the next unvisited position. Returns `false` when none is left.
    fn start_next_walk(&mut self) -> bool {
        while self.next_root < self.visited.len() {
            let root = self.next_root;
            self.next_root += 1;
            if !self.visited.is_visited(root) {
                self.roots.push(root);
                self.stack.push(root);
                return true;
            }
        }
        false
    }
}

impl<T, W: Weight> Iterator for Dfs<'_, T, W> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(v) = self.step() {
                return Some(v);
            }
            if !self.start_next_walk() {
                return None;
            }
        }
    }
}

/// A breadth-first iterator from a single source.
///
/// Vertices are marked when enqueued, so each reachable vertex is yielded once.
pub struct Bfs<'a, T, W> {
    graph: &'a MatrixGraph<T, W>,
    visited: VisitedSet,
    queue: VecDeque<usize>,
}

impl<'a, T, W: Weight> Bfs<'a, T, W> {
    /// Creates a breadth-first iterator starting at `source`.
    ///
    /// An out-of-range `source` yields nothing.
    pub fn new(graph: &'a MatrixGraph<T, W>, source: usize) -> Self {
        let mut visited = VisitedSet::new(graph.order());
        let mut queue = VecDeque::new();

        if source < graph.order() {
            visited.try_visit(source);
            queue.push_back(source);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<T, W: Weight> Iterator for Bfs<'_, T, W> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors(u) {
            if self.visited.try_visit(v) {
                self.queue.push_back(v);
            }
        }

        trace!(vertex = u, "bfs visit");
        Some(u)
    }
}

impl<T, W: Weight> MatrixGraph<T, W> {
    /// Lazy depth-first iteration over every vertex.
    pub fn dfs_iter(&self) -> Dfs<'_, T, W> {
        Dfs::new(self)
    }

    /// Runs a full depth-first traversal.
    ///
    /// With `track_connectivity`, every position visited so far is appended to the
    /// connected accumulator after each walk finishes. Earlier walks' vertices are
    /// appended again by later walks.
    pub fn dfs(&mut self, track_connectivity: bool) -> DepthFirst {
        let n = self.order();
        let mut order = Vec::with_capacity(n);
        let mut recorded = Vec::new();

        let (visited, roots) = {
            let mut walk = Dfs::new(&*self);
            while walk.start_next_walk() {
                while let Some(v) = walk.step() {
                    order.push(v);
                }
                if track_connectivity {
                    recorded.extend(walk.visited.iter());
                }
            }
            (walk.visited.count(), walk.roots)
        };

        self.connected.extend(recorded);
        debug!(
            visited,
            components = roots.len(),
            connected = self.connected.len(),
            "dfs finished"
        );
        DepthFirst { order, roots }
    }

    /// Lazy breadth-first iteration from `source`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfBounds`] if `source >= order()`.
    pub fn bfs_iter(&self, source: usize) -> Result<Bfs<'_, T, W>> {
        GraphError::check(source, self.order()).map(|s| Bfs::new(self, s))
    }

    /// Breadth-first order from position 0. Empty for an empty graph.
    pub fn bfs(&self) -> Vec<usize> {
        Bfs::new(self, 0).collect()
    }

    /// Breadth-first order from `source`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfBounds`] if `source >= order()`.
    pub fn bfs_from(&self, source: usize) -> Result<Vec<usize>> {
        let order: Vec<usize> = self.bfs_iter(source)?.collect();
        debug!(source, visited = order.len(), "bfs finished");
        Ok(order)
    }
}
