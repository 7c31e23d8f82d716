//! Range-based views over a record stream.
//!
//! Renderers that work in hunks rather than single lines can group records
//! into [`Block`]s; [`DiffStats`] summarizes a stream.

use core::ops::Range;

use serde::{Deserialize, Serialize};

use crate::record::{Delta, DiffRecord};

/// A maximal run of records of the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Block {
    /// Common lines.
    Equal {
        /// Lines in the left sequence.
        left: Range<usize>,
        /// Lines in the right sequence.
        right: Range<usize>,
    },
    /// Lines present only on the left.
    Delete {
        /// Deleted lines in the left sequence.
        left: Range<usize>,
        /// Right-hand cursor position (empty range).
        at: usize,
    },
    /// Lines present only on the right.
    Insert {
        /// Right-hand cursor position's counterpart on the left (empty range).
        at: usize,
        /// Inserted lines in the right sequence.
        right: Range<usize>,
    },
    /// Deleted lines immediately followed by inserted lines.
    Replace {
        /// Deleted lines in the left sequence.
        left: Range<usize>,
        /// Inserted lines in the right sequence.
        right: Range<usize>,
    },
}

impl Block {
    /// Lines of the left sequence covered by the block.
    #[must_use]
    pub fn left_range(&self) -> Range<usize> {
        match self {
            Self::Equal { left, .. } | Self::Delete { left, .. } | Self::Replace { left, .. } => {
                left.clone()
            }
            Self::Insert { at, .. } => *at..*at,
        }
    }

    /// Lines of the right sequence covered by the block.
    #[must_use]
    pub fn right_range(&self) -> Range<usize> {
        match self {
            Self::Equal { right, .. }
            | Self::Insert { right, .. }
            | Self::Replace { right, .. } => right.clone(),
            Self::Delete { at, .. } => *at..*at,
        }
    }

    /// Returns true unless the block is [`Block::Equal`].
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Equal { .. })
    }
}

/// Groups a record stream into blocks.
///
/// Consecutive common records form one [`Block::Equal`]; a run of left-only
/// records directly followed by right-only records forms one
/// [`Block::Replace`].
#[must_use]
pub fn group<T>(records: &[DiffRecord<T>]) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();

    for record in records {
        let (l, r) = (record.left_index, record.right_index);
        if let Some(last) = blocks.last_mut() {
            if extend(last, record.delta, l, r) {
                continue;
            }
        }
        blocks.push(match record.delta {
            Delta::Common => Block::Equal {
                left: l..l + 1,
                right: r..r + 1,
            },
            Delta::LeftOnly => Block::Delete {
                left: l..l + 1,
                at: r,
            },
            Delta::RightOnly => Block::Insert {
                at: l,
                right: r..r + 1,
            },
        });
    }

    blocks
}

/// Grows `block` by one record if the record continues it.
fn extend(block: &mut Block, delta: Delta, l: usize, r: usize) -> bool {
    if delta == Delta::RightOnly {
        if let Block::Delete { left, at } = &*block {
            if left.end != l || *at != r {
                return false;
            }
            let left = left.clone();
            *block = Block::Replace {
                left,
                right: r..r + 1,
            };
            return true;
        }
    }

    match (delta, block) {
        (Delta::Common, Block::Equal { left, right }) if left.end == l && right.end == r => {
            left.end += 1;
            right.end += 1;
            true
        }
        (Delta::LeftOnly, Block::Delete { left, at }) if left.end == l && *at == r => {
            left.end += 1;
            true
        }
        (Delta::RightOnly, Block::Insert { at, right }) if *at == l && right.end == r => {
            right.end += 1;
            true
        }
        (Delta::RightOnly, Block::Replace { left, right }) if left.end == l && right.end == r => {
            right.end += 1;
            true
        }
        _ => false,
    }
}

/// Counts of each record kind in a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffStats {
    /// Number of common records.
    pub common: usize,
    /// Number of left-only records.
    pub left_only: usize,
    /// Number of right-only records.
    pub right_only: usize,
}

impl DiffStats {
    /// Tallies a record stream.
    #[must_use]
    pub fn from_records<T>(records: &[DiffRecord<T>]) -> Self {
        records.iter().fold(Self::default(), |mut stats, record| {
            match record.delta {
                Delta::Common => stats.common += 1,
                Delta::LeftOnly => stats.left_only += 1,
                Delta::RightOnly => stats.right_only += 1,
            }
            stats
        })
    }

    /// Returns true when the stream contains no changes.
    #[must_use]
    pub const fn is_identical(&self) -> bool {
        self.left_only == 0 && self.right_only == 0
    }

    /// Total number of changed records.
    #[must_use]
    pub const fn changes(&self) -> usize {
        self.left_only + self.right_only
    }
}
