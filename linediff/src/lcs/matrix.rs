//! Dynamic-programming table for the longest common subsequence.
use tracing::warn;

use crate::error::{DiffError, Exhaustion};

/// The `(m+1) x (n+1)` LCS table of two sequences, stored row-major.
///
/// Cell `(i, j)` holds the LCS length of the first `i` left elements and the
/// first `j` right elements. Row and column 0 are zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsMatrix {
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl LcsMatrix {
    /// Builds the table with no resource limit.
    #[must_use]
    pub fn build<T: PartialEq>(left: &[T], right: &[T]) -> Self {
        let (rows, cols) = (left.len() + 1, right.len() + 1);
        let mut matrix = Self {
            cells: vec![0; rows * cols],
            rows,
            cols,
        };
        matrix.fill(left, right);
        matrix
    }

    /// Builds the table, refusing if it needs more than `max_cells` cells or
    /// the allocation fails.
    ///
    /// # Errors
    /// Returns [`DiffError::ResourceExhausted`] instead of allocating.
    pub fn try_build<T: PartialEq>(
        left: &[T],
        right: &[T],
        max_cells: usize,
    ) -> Result<Self, DiffError> {
        let (rows, cols) = (left.len() + 1, right.len() + 1);
        let exhausted = |cause| {
            warn!(rows, cols, %cause, "LCS matrix exceeds resource budget");
            DiffError::ResourceExhausted { rows, cols, cause }
        };

        let total = rows.checked_mul(cols).ok_or_else(|| exhausted(Exhaustion::Overflow))?;
        if total > max_cells {
            return Err(exhausted(Exhaustion::CellLimit { limit: max_cells }));
        }

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(total)
            .map_err(|_| exhausted(Exhaustion::Allocation))?;
        cells.resize(total, 0);

        let mut matrix = Self { cells, rows, cols };
        matrix.fill(left, right);
        Ok(matrix)
    }

    fn fill<T: PartialEq>(&mut self, left: &[T], right: &[T]) {
        let cols = self.cols;
        for (i, l) in left.iter().enumerate() {
            let (above, current) = self.cells[i * cols..(i + 2) * cols].split_at_mut(cols);
            for (j, r) in right.iter().enumerate() {
                current[j + 1] = if l == r {
                    above[j] + 1
                } else {
                    above[j + 1].max(current[j])
                };
            }
        }
    }

    /// Number of rows (`left.len() + 1`).
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`right.len() + 1`).
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Reads cell `(i, j)`.
    ///
    /// # Panics
    /// Panics if the cell is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of bounds");
        self.cells[i * self.cols + j]
    }

    /// Length of the longest common subsequence of the full inputs.
    #[must_use]
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}
