//! Single-source shortest paths (Dijkstra) over the weight matrix.

use core::cmp::Ordering;

use tracing::debug;

use super::MatrixGraph;
use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedSet;
use crate::graph::Weight;

/// Distances and predecessors from one source vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths<W> {
    source: usize,
    distances: Vec<Option<W>>,
    predecessors: Vec<usize>,
}

impl<W: Weight> ShortestPaths<W> {
    /// The source vertex.
    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Shortest known distance per vertex; `None` if unreachable.
    #[inline]
    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    /// Predecessor per vertex. Unreachable vertices and the source point at the source.
    #[inline]
    pub fn predecessors(&self) -> &[usize] {
        &self.predecessors
    }

    /// Distance to `target`, or `None` if unreachable or out of range.
    #[inline]
    pub fn distance(&self, target: usize) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    /// Returns `true` if `target` is reachable from the source.
    #[inline]
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance(target).is_some()
    }

    /// Vertices from the source to `target`, inclusive.
    ///
    /// Returns `None` if `target` is unreachable or out of range.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current];
            path.push(current);
            if path.len() > self.predecessors.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Orders optional distances with `None` as infinity.
#[inline]
fn by_distance<W: Ord>(a: Option<W>, b: Option<W>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl<T, W: Weight> MatrixGraph<T, W> {
    /// Computes shortest distances from `from` to every vertex.
    ///
    /// `to` is validated but does not stop the search early; reconstruct the route
    /// with [`ShortestPaths::path_to`].
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfBounds`] if `from` or `to` is out of range.
    pub fn dijkstra(&self, from: usize, to: usize) -> Result<ShortestPaths<W>> {
        GraphError::check(from, self.order())?;
        GraphError::check(to, self.order())?;
        Ok(self.run_dijkstra(from, None))
    }

    /// Shortest distance and route from `from` to `to`.
    ///
    /// Stops as soon as `to` is settled. Returns `Ok(None)` if `to` is unreachable.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfBounds`] if `from` or `to` is out of range.
    pub fn shortest_path(&self, from: usize, to: usize) -> Result<Option<(W, Vec<usize>)>> {
        GraphError::check(from, self.order())?;
        GraphError::check(to, self.order())?;
        let paths = self.run_dijkstra(from, Some(to));
        Ok(paths
            .distance(to)
            .and_then(|d| paths.path_to(to).map(|path| (d, path))))
    }

    fn run_dijkstra(&self, from: usize, stop_at: Option<usize>) -> ShortestPaths<W> {
        let n = self.order();
        let mut distances = self.matrix.row(from, n).to_vec();
        let mut predecessors = vec![from; n];
        let mut settled = VisitedSet::new(n);
        settled.try_visit(from);
        let mut settled_count = 1;

        // The last unsettled vertex is final once every other vertex has relaxed it.
        while settled_count + 1 < n && stop_at != Some(from) {
            let Some(w) = (0..n)
                .filter(|&v| !settled.is_visited(v))
                .min_by(|&a, &b| by_distance(distances[a], distances[b]))
            else {
                break;
            };
            let Some(dw) = distances[w] else {
                // Everything left is unreachable.
                break;
            };

            settled.try_visit(w);
            settled_count += 1;
            if stop_at == Some(w) {
                break;
            }

            for (j, cell) in self.matrix.row(w, n).iter().enumerate() {
                if settled.is_visited(j) {
                    continue;
                }
                let Some(candidate) = cell.and_then(|edge| dw.path_sum(edge)) else {
                    continue;
                };
                if distances[j].map_or(true, |dj| candidate < dj) {
                    distances[j] = Some(candidate);
                    predecessors[j] = w;
                }
            }
        }

        debug!(source = from, settled = settled_count, order = n, "dijkstra finished");
        ShortestPaths {
            source: from,
            distances,
            predecessors,
        }
    }
}
