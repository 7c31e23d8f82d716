//! Optimal alignment via the longest common subsequence.
//!
//! The equal prefix and suffix are trimmed first and emitted directly; only
//! the middle region goes through the `O(m*n)` matrix and its backtrack.

pub mod backtrack;
pub mod matrix;

pub use backtrack::backtrack;
pub use matrix::LcsMatrix;

use tracing::debug;

use crate::aligner::Aligner;
use crate::config::{DEFAULT_MAX_MATRIX_CELLS, DiffSettings};
use crate::error::DiffError;
use crate::record::DiffRecord;
use crate::trim::Bounds;

/// Computes the optimal alignment of two sequences.
///
/// Never fails; memory grows with the product of the untrimmed middle
/// lengths. Use [`try_diff`] to enforce a budget.
#[must_use]
pub fn diff<T: PartialEq + Clone>(left: &[T], right: &[T]) -> Vec<DiffRecord<T>> {
    let bounds = Bounds::of(left, right);
    let (lm, rm) = (bounds.middle(left.len()), bounds.middle(right.len()));
    let matrix = LcsMatrix::build(&left[lm], &right[rm]);
    compose(left, right, bounds, &matrix)
}

/// Computes the optimal alignment, refusing matrices larger than
/// `settings.max_matrix_cells`.
///
/// Trimmed regions never count against the budget.
///
/// # Errors
/// Returns [`DiffError::ResourceExhausted`] when the middle region's matrix
/// cannot be built within the budget.
pub fn try_diff<T: PartialEq + Clone>(
    left: &[T],
    right: &[T],
    settings: &DiffSettings,
) -> Result<Vec<DiffRecord<T>>, DiffError> {
    let bounds = Bounds::of(left, right);
    let (lm, rm) = (bounds.middle(left.len()), bounds.middle(right.len()));
    // A middle with an empty side is a pure deletion or insertion; its table is
    // a single row or column and is never charged against the budget.
    let matrix = if lm.is_empty() || rm.is_empty() {
        LcsMatrix::build(&left[lm], &right[rm])
    } else {
        LcsMatrix::try_build(&left[lm], &right[rm], settings.max_matrix_cells)?
    };
    Ok(compose(left, right, bounds, &matrix))
}

fn compose<T: PartialEq + Clone>(
    left: &[T],
    right: &[T],
    bounds: Bounds,
    matrix: &LcsMatrix,
) -> Vec<DiffRecord<T>> {
    let Bounds { prefix, suffix } = bounds;
    let (lm, rm) = (bounds.middle(left.len()), bounds.middle(right.len()));
    debug!(
        prefix,
        suffix,
        left_middle = lm.len(),
        right_middle = rm.len(),
        "Aligning middle region with LCS matrix"
    );

    let common = prefix + matrix.lcs_len() + suffix;
    let mut records = Vec::with_capacity(left.len() + right.len() - common);
    records.extend(
        left[..prefix]
            .iter()
            .enumerate()
            .map(|(i, item)| DiffRecord::common(item.clone(), i, i)),
    );
    records.extend(backtrack(&left[lm.clone()], &right[rm.clone()], matrix, prefix, prefix));
    records.extend(
        left[lm.end..]
            .iter()
            .enumerate()
            .map(|(k, item)| DiffRecord::common(item.clone(), lm.end + k, rm.end + k)),
    );
    records
}

/// [`Aligner`] running the optimal LCS strategy under a cell budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcsAligner {
    max_matrix_cells: usize,
}

impl LcsAligner {
    /// Creates an aligner with the default cell budget.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_matrix_cells: DEFAULT_MAX_MATRIX_CELLS,
        }
    }

    /// Creates an aligner with an explicit cell budget.
    #[must_use]
    pub const fn with_max_matrix_cells(max_matrix_cells: usize) -> Self {
        Self { max_matrix_cells }
    }
}

impl Default for LcsAligner {
    fn default() -> Self {
        Self::new()
    }
}

impl Aligner for LcsAligner {
    fn name(&self) -> &'static str {
        "lcs"
    }

    fn align<T>(&self, left: &[T], right: &[T]) -> Result<Vec<DiffRecord<T>>, DiffError>
    where
        T: Eq + core::hash::Hash + Clone,
    {
        let settings = DiffSettings::default().with_max_matrix_cells(self.max_matrix_cells);
        try_diff(left, right, &settings)
    }
}
