//! Boundary trimming.
//!
//! Equal leading and trailing runs never need to enter an alignment stage:
//! they are emitted as common records directly, which keeps long unchanged
//! regions out of the quadratic LCS matrix.

use core::ops::Range;

/// Lengths of the equal prefix and suffix shared by two sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    /// Number of leading elements equal pairwise.
    pub prefix: usize,
    /// Number of trailing elements equal pairwise, disjoint from the prefix.
    pub suffix: usize,
}

impl Bounds {
    /// Computes the bounds of two sequences.
    #[must_use]
    pub fn of<T: PartialEq>(left: &[T], right: &[T]) -> Self {
        let (prefix, suffix) = count_equal_bounds(left, right);
        Self { prefix, suffix }
    }

    /// The untrimmed middle of a sequence of length `len`.
    ///
    /// Bounds wider than `len` clamp to an empty range at the end of the
    /// prefix, so the result can always slice a sequence of that length.
    #[must_use]
    pub const fn middle(&self, len: usize) -> Range<usize> {
        let end = len.saturating_sub(self.suffix);
        let start = if self.prefix < end { self.prefix } else { end };
        start..end
    }

    /// Returns true when nothing was trimmed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.prefix == 0 && self.suffix == 0
    }
}

/// Counts the equal leading and trailing elements of two sequences.
///
/// The suffix scan is bounded by `min(left.len(), right.len()) - prefix`, so an
/// element is never claimed by both the prefix and the suffix. Identical
/// sequences therefore yield `(len, 0)`.
#[must_use]
pub fn count_equal_bounds<T: PartialEq>(left: &[T], right: &[T]) -> (usize, usize) {
    let shortest = left.len().min(right.len());

    let prefix = left
        .iter()
        .zip(right)
        .take_while(|(l, r)| l == r)
        .count();

    let suffix = left[prefix..]
        .iter()
        .rev()
        .zip(right[prefix..].iter().rev())
        .take(shortest - prefix)
        .take_while(|(l, r)| l == r)
        .count();

    (prefix, suffix)
}
