//! Edge weight abstraction.

use core::fmt::Debug;

use num_traits::{CheckedAdd, PrimInt, Unsigned, Zero};

/// An edge weight: a non-negative integer cost.
///
/// Implemented for every primitive unsigned integer, so negative weights are
/// unrepresentable. Path sums use [`CheckedAdd`]; an overflowing sum is treated as
/// "no improvement" rather than wrapping.
pub trait Weight: Copy + Ord + Debug + Zero + CheckedAdd {
    /// Adds two path costs, returning `None` on overflow.
    #[inline]
    fn path_sum(self, other: Self) -> Option<Self> {
        self.checked_add(&other)
    }
}

impl<W> Weight for W where W: PrimInt + Unsigned + Debug {}
