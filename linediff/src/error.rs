//! Error types for alignment and settings loading.

use core::fmt;

use thiserror::Error;

/// Why an LCS matrix could not be materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exhaustion {
    /// The matrix needs more cells than the configured budget allows.
    CellLimit {
        /// The configured maximum number of cells.
        limit: usize,
    },
    /// The cell count does not fit in `usize`.
    Overflow,
    /// The allocator refused the request.
    Allocation,
}

impl fmt::Display for Exhaustion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellLimit { limit } => write!(f, "cell budget of {limit} exceeded"),
            Self::Overflow => write!(f, "cell count overflows usize"),
            Self::Allocation => write!(f, "allocation failed"),
        }
    }
}

/// Errors produced by the fallible alignment entry points.
#[derive(Debug, Error)]
pub enum DiffError {
    /// The optimal-alignment matrix would not fit in the resource budget.
    #[error("LCS matrix of {rows}x{cols} cells cannot be built: {cause}")]
    ResourceExhausted {
        /// Matrix rows (left middle length + 1).
        rows: usize,
        /// Matrix columns (right middle length + 1).
        cols: usize,
        /// What ran out.
        cause: Exhaustion,
    },

    /// Settings could not be loaded or deserialized.
    #[error("Invalid diff settings: {0}")]
    Config(#[from] config::ConfigError),
}

impl DiffError {
    /// Returns true for [`DiffError::ResourceExhausted`].
    #[must_use]
    pub const fn is_resource_exhausted(&self) -> bool {
        matches!(self, Self::ResourceExhausted { .. })
    }
}
