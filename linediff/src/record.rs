//! Record types shared by every alignment strategy.
//!
//! An alignment is expressed as an ordered list of [`DiffRecord`]s. Each record
//! carries one element of either input together with the positions it occupies
//! (or would occupy) in both sequences, which is all a renderer needs to print
//! line numbers next to the payload.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which side(s) of the alignment an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delta {
    /// The element is present, with an equal value, in both sequences.
    Common,
    /// The element exists only in the left (old) sequence.
    LeftOnly,
    /// The element exists only in the right (new) sequence.
    RightOnly,
}

impl Delta {
    /// Returns the one-character marker used by the plain-text renderer.
    #[must_use]
    pub const fn sign(self) -> char {
        match self {
            Self::Common => ' ',
            Self::LeftOnly => '-',
            Self::RightOnly => '+',
        }
    }

    /// Returns the kind with left and right exchanged.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Common => Self::Common,
            Self::LeftOnly => Self::RightOnly,
            Self::RightOnly => Self::LeftOnly,
        }
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => write!(f, "common"),
            Self::LeftOnly => write!(f, "left-only"),
            Self::RightOnly => write!(f, "right-only"),
        }
    }
}

/// One element of an alignment.
///
/// For [`Delta::Common`] records both indices point at the element. For
/// [`Delta::LeftOnly`] records `right_index` is where the right-hand cursor
/// stood when the element was dropped, and symmetrically for
/// [`Delta::RightOnly`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffRecord<T> {
    /// The element value, cloned from the input sequence.
    pub payload: T,
    /// Which side(s) the element belongs to.
    pub delta: Delta,
    /// Position in the left sequence (0-based).
    pub left_index: usize,
    /// Position in the right sequence (0-based).
    pub right_index: usize,
}

impl<T> DiffRecord<T> {
    /// Creates a record.
    #[must_use]
    pub const fn new(payload: T, delta: Delta, left_index: usize, right_index: usize) -> Self {
        Self {
            payload,
            delta,
            left_index,
            right_index,
        }
    }

    /// Creates a [`Delta::Common`] record.
    #[must_use]
    pub const fn common(payload: T, left_index: usize, right_index: usize) -> Self {
        Self::new(payload, Delta::Common, left_index, right_index)
    }

    /// Creates a [`Delta::LeftOnly`] record.
    #[must_use]
    pub const fn left_only(payload: T, left_index: usize, right_index: usize) -> Self {
        Self::new(payload, Delta::LeftOnly, left_index, right_index)
    }

    /// Creates a [`Delta::RightOnly`] record.
    #[must_use]
    pub const fn right_only(payload: T, left_index: usize, right_index: usize) -> Self {
        Self::new(payload, Delta::RightOnly, left_index, right_index)
    }

    /// Returns true unless the record is [`Delta::Common`].
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self.delta, Delta::Common)
    }

    /// Returns the left index if this record consumes an element of the left sequence.
    #[must_use]
    pub const fn left_position(&self) -> Option<usize> {
        match self.delta {
            Delta::Common | Delta::LeftOnly => Some(self.left_index),
            Delta::RightOnly => None,
        }
    }

    /// Returns the right index if this record consumes an element of the right sequence.
    #[must_use]
    pub const fn right_position(&self) -> Option<usize> {
        match self.delta {
            Delta::Common | Delta::RightOnly => Some(self.right_index),
            Delta::LeftOnly => None,
        }
    }

    /// Returns the record as it would appear had the inputs been swapped.
    #[must_use]
    pub fn mirrored(self) -> Self {
        Self {
            payload: self.payload,
            delta: self.delta.mirrored(),
            left_index: self.right_index,
            right_index: self.left_index,
        }
    }

    /// Maps the payload, keeping kind and positions.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> DiffRecord<U> {
        DiffRecord {
            payload: f(self.payload),
            delta: self.delta,
            left_index: self.left_index,
            right_index: self.right_index,
        }
    }
}

impl<T: fmt::Display> fmt::Display for DiffRecord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} ({}, {})",
            self.delta.sign(),
            self.payload,
            self.left_index,
            self.right_index
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_delta() {
        let common = DiffRecord::common("a", 1, 2);
        assert_eq!(common.left_position(), Some(1));
        assert_eq!(common.right_position(), Some(2));

        let left = DiffRecord::left_only("b", 3, 4);
        assert_eq!(left.left_position(), Some(3));
        assert_eq!(left.right_position(), None);

        let right = DiffRecord::right_only("c", 5, 6);
        assert_eq!(right.left_position(), None);
        assert_eq!(right.right_position(), Some(6));
    }

    #[test]
    fn test_mirrored_swaps_sides() {
        let record = DiffRecord::left_only("gone", 7, 2).mirrored();
        assert_eq!(record, DiffRecord::right_only("gone", 2, 7));
        assert!(record.is_change());
        assert!(!DiffRecord::common("x", 0, 0).is_change());
    }

    #[test]
    fn test_serde_uses_snake_case_delta() {
        let record = DiffRecord::right_only("five".to_string(), 2, 1);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"payload":"five","delta":"right_only","left_index":2,"right_index":1}"#
        );
        let back: DiffRecord<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_display() {
        assert_eq!(DiffRecord::left_only("two", 1, 1).to_string(), "-two (1, 1)");
        assert_eq!(Delta::RightOnly.to_string(), "right-only");
    }
}
