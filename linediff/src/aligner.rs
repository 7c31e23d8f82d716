//! Pluggable alignment strategies.
//!
//! Both strategies share the same record-stream contract, so callers can pick
//! one from [`DiffSettings`] at runtime or hold a concrete [`Aligner`].

use core::hash::Hash;

use crate::anchor::{AnchoredAligner, anchored_diff_with};
use crate::config::{DiffSettings, Strategy};
use crate::error::DiffError;
use crate::lcs::try_diff;
use crate::record::DiffRecord;

/// Trait for alignment algorithms.
///
/// Implementations hold no mutable state, so a single instance can be shared
/// across threads.
pub trait Aligner: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Aligns two sequences into a record stream.
    ///
    /// # Errors
    /// Returns [`DiffError::ResourceExhausted`] if the strategy has a resource
    /// budget and the inputs exceed it.
    fn align<T>(&self, left: &[T], right: &[T]) -> Result<Vec<DiffRecord<T>>, DiffError>
    where
        T: Eq + Hash + Clone;
}

/// Aligns two sequences with the strategy selected in `settings`.
///
/// # Errors
/// Returns [`DiffError::ResourceExhausted`] when [`Strategy::Optimal`] needs a
/// matrix larger than `settings.max_matrix_cells`.
pub fn align<T: Eq + Hash + Clone>(
    left: &[T],
    right: &[T],
    settings: &DiffSettings,
) -> Result<Vec<DiffRecord<T>>, DiffError> {
    match settings.strategy {
        Strategy::Optimal => try_diff(left, right, settings),
        Strategy::Anchored => Ok(anchored_diff_with(left, right, settings.anchor_mode)),
    }
}

impl From<&DiffSettings> for AnchoredAligner {
    fn from(settings: &DiffSettings) -> Self {
        Self::with_mode(settings.anchor_mode)
    }
}
