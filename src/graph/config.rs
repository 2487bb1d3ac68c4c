//! Graph construction settings.

/// Matrix side allocated by [`GraphConfig::default`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Number of rows/columns added each time the matrix grows.
pub const DEFAULT_GROWTH_INCREMENT: usize = 10;

/// Storage settings for a [`MatrixGraph`](super::MatrixGraph).
///
/// ```rust
/// use densegraph::{GraphConfig, MatrixGraph};
///
/// let config = GraphConfig::default().initial_capacity(4).growth_increment(2);
/// let graph: MatrixGraph<u8> = MatrixGraph::with_config(config);
/// assert_eq!(graph.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Side of the matrix allocated up front.
    pub initial_capacity: usize,
    /// Rows/columns added on growth. Clamped to at least 1.
    pub growth_increment: usize,
}

impl GraphConfig {
    /// Sets the initial matrix side.
    #[must_use]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the growth increment. Zero is clamped to 1.
    #[must_use]
    pub fn growth_increment(mut self, increment: usize) -> Self {
        self.growth_increment = increment.max(1);
        self
    }

    #[inline]
    pub(crate) fn increment(&self) -> usize {
        self.growth_increment.max(1)
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth_increment: DEFAULT_GROWTH_INCREMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = GraphConfig::default();
        assert_eq!(config.initial_capacity, 10);
        assert_eq!(config.growth_increment, 10);
    }

    #[test]
    fn zero_increment_is_clamped() {
        let config = GraphConfig::default().growth_increment(0);
        assert_eq!(config.growth_increment, 1);

        let raw = GraphConfig { initial_capacity: 0, growth_increment: 0 };
        assert_eq!(raw.increment(), 1);
    }
}
