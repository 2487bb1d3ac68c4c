//! Error types for graph operations.

use thiserror::Error;

/// Errors returned by position-checked graph operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex position was outside `0..order`.
    #[error("vertex position {position} out of bounds for graph of order {order}")]
    OutOfBounds {
        /// The rejected position.
        position: usize,
        /// The number of vertices at the time of the call.
        order: usize,
    },
}

/// Result type alias for graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;

impl GraphError {
    /// Returns `Ok(position)` when `position < order`, otherwise an `OutOfBounds` error.
    #[inline]
    pub(crate) fn check(position: usize, order: usize) -> Result<usize> {
        if position < order {
            Ok(position)
        } else {
            Err(Self::OutOfBounds { position, order })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_positions_below_order() {
        assert_eq!(GraphError::check(0, 1), Ok(0));
        assert_eq!(GraphError::check(4, 5), Ok(4));
    }

    #[test]
    fn check_rejects_order_and_beyond() {
        assert_eq!(
            GraphError::check(3, 3),
            Err(GraphError::OutOfBounds { position: 3, order: 3 })
        );
        assert!(GraphError::check(0, 0).is_err());
    }

    #[test]
    fn display_names_position_and_order() {
        let err = GraphError::OutOfBounds { position: 7, order: 2 };
        assert_eq!(
            err.to_string(),
            "vertex position 7 out of bounds for graph of order 2"
        );
    }
}
