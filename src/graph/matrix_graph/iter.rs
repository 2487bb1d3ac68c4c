//! Neighbor and edge iteration over the weight matrix.

use core::iter::{Enumerate, FusedIterator};
use core::slice;

use super::storage::WeightMatrix;

/// Iterator over the positions adjacent to one vertex, ascending.
///
/// Produced by [`MatrixGraph::neighbors`](super::MatrixGraph::neighbors).
#[derive(Clone, Debug)]
pub struct Neighbors<'a, W> {
    row: Enumerate<slice::Iter<'a, Option<W>>>,
}

impl<'a, W> Neighbors<'a, W> {
    #[inline]
    pub(super) fn new(row: &'a [Option<W>]) -> Self {
        Self {
            row: row.iter().enumerate(),
        }
    }
}

impl<W> Iterator for Neighbors<'_, W> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.row
            .by_ref()
            .find_map(|(v, cell)| cell.is_some().then_some(v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.row.size_hint().1)
    }
}

impl<W> DoubleEndedIterator for Neighbors<'_, W> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.row
            .by_ref()
            .rev()
            .find_map(|(v, cell)| cell.is_some().then_some(v))
    }
}

impl<W> FusedIterator for Neighbors<'_, W> {}

/// Iterator over each undirected edge once, as `(i, j, weight)` with `i < j`.
///
/// Produced by [`MatrixGraph::edges`](super::MatrixGraph::edges). Self cells are skipped.
#[derive(Clone, Debug)]
pub struct Edges<'a, W> {
    matrix: &'a WeightMatrix<W>,
    order: usize,
    row: usize,
    col: usize,
}

impl<'a, W> Edges<'a, W> {
    #[inline]
    pub(super) fn new(matrix: &'a WeightMatrix<W>, order: usize) -> Self {
        Self {
            matrix,
            order,
            row: 0,
            col: 1,
        }
    }
}

impl<W: Copy> Iterator for Edges<'_, W> {
    type Item = (usize, usize, W);

    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.order {
            if self.col >= self.order {
                self.row += 1;
                self.col = self.row + 1;
                continue;
            }
            let (row, col) = (self.row, self.col);
            self.col += 1;
            if let Some(weight) = self.matrix.get(row, col) {
                return Some((row, col, weight));
            }
        }
        None
    }
}

impl<W: Copy> FusedIterator for Edges<'_, W> {}
