//! Contiguous square weight matrix.
//!
//! Cells are stored row-major in a single `Vec<Option<W>>`. The matrix side is the
//! allocated capacity; the caller tracks how many leading rows/columns are live.

/// A square, row-major matrix of optional weights.
#[derive(Clone, Debug)]
pub(crate) struct WeightMatrix<W> {
    cells: Vec<Option<W>>,
    side: usize,
}

impl<W: Copy> WeightMatrix<W> {
    /// Allocates a `side x side` matrix with every cell empty.
    pub(crate) fn new(side: usize) -> Self {
        Self {
            cells: vec![None; side * side],
            side,
        }
    }

    /// Allocated rows (= columns).
    #[inline(always)]
    pub(crate) fn side(&self) -> usize {
        self.side
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.side && col < self.side, "cell ({row}, {col}) outside side {}", self.side);
        row * self.side + col
    }

    #[inline(always)]
    pub(crate) fn get(&self, row: usize, col: usize) -> Option<W> {
        self.cells[self.offset(row, col)]
    }

    /// Writes one cell and returns its previous content.
    #[inline(always)]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Option<W>) -> Option<W> {
        let at = self.offset(row, col);
        core::mem::replace(&mut self.cells[at], value)
    }

    /// Writes `(a, b)` and `(b, a)`; returns the previous content of `(a, b)`.
    #[inline]
    pub(crate) fn set_symmetric(&mut self, a: usize, b: usize, value: Option<W>) -> Option<W> {
        let previous = self.set(a, b, value);
        self.set(b, a, value);
        previous
    }

    /// The first `len` cells of `row`.
    #[inline]
    pub(crate) fn row(&self, row: usize, len: usize) -> &[Option<W>] {
        let start = self.offset(row, 0);
        &self.cells[start..start + len.min(self.side)]
    }

    /// Reallocates to side `len + increment`.
    ///
    /// Cells with both coordinates below `len` are copied; every other cell is empty.
    pub(crate) fn grow(&mut self, len: usize, increment: usize) {
        let side = len + increment;
        let mut cells = vec![None; side * side];
        let live = len.min(self.side);
        for row in 0..live {
            let from = self.offset(row, 0);
            cells[row * side..row * side + live].copy_from_slice(&self.cells[from..from + live]);
        }
        self.cells = cells;
        self.side = side;
    }

    /// Removes row and column `position` from the live `len x len` block.
    ///
    /// Later rows shift up and later columns shift left; the vacated last row and
    /// column of the live block are emptied.
    ///
    /// # Panics
    /// Panics if `position >= len` or `len > side`.
    pub(crate) fn remove(&mut self, position: usize, len: usize) {
        assert!(position < len, "position {position} out of bounds for len {len}");
        assert!(len <= self.side, "len {len} exceeds matrix side {}", self.side);

        let shrunk = len - 1;
        let source = |k: usize| if k < position { k } else { k + 1 };

        // Every source offset is >= its destination offset, so an ascending
        // in-place sweep never reads a cell it has already overwritten.
        for row in 0..shrunk {
            for col in 0..shrunk {
                let value = self.get(source(row), source(col));
                self.set(row, col, value);
            }
        }
        for k in 0..len {
            self.set(shrunk, k, None);
            self.set(k, shrunk, None);
        }
    }
}
