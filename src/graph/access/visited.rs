//! Visited sets for graph traversals.
//!
//! `VisitedSet` is a dense, word-packed bitmap sized to the vertex count at the start of a
//! traversal. Traversals own their visited set, so no state leaks between runs.

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set.
#[derive(Clone, Debug)]
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    /// Creates a set of `len` unvisited positions.
    #[inline]
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` iff `node` was unvisited; marks it visited either way.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        assert!(node < self.len, "node {node} out of bounds for visited set of {}", self.len);
        let word = &mut self.words[node / WORD_BITS];
        let mask = 1u64 << (node % WORD_BITS);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        node < self.len && self.words[node / WORD_BITS] & (1u64 << (node % WORD_BITS)) != 0
    }

    /// Number of visited positions.
    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Visited positions in ascending order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(move |&i| self.is_visited(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_visit_reports_first_visit_only() {
        let mut set = VisitedSet::new(3);
        assert!(set.try_visit(1));
        assert!(!set.try_visit(1));
        assert!(set.is_visited(1));
        assert!(!set.is_visited(0));
    }

    #[test]
    fn spans_multiple_words() {
        let mut set = VisitedSet::new(130);
        for node in [0, 63, 64, 127, 129] {
            assert!(set.try_visit(node));
        }
        assert_eq!(set.count(), 5);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 63, 64, 127, 129]);
        assert!(!set.is_visited(130));
    }

    #[test]
    fn empty_set_has_no_words() {
        let set = VisitedSet::new(0);
        assert_eq!(set.len(), 0);
        assert_eq!(set.count(), 0);
        assert!(!set.is_visited(0));
    }
}
