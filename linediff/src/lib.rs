//! Line-level alignment of two sequences.
//!
//! `linediff` aligns two ordered sequences (usually the lines of two files)
//! and produces a stream of [`DiffRecord`]s that renderers turn into
//! human-readable diffs. Two strategies are provided:
//!
//! 1. [`diff`]: the optimal alignment from a longest-common-subsequence table,
//!    after trimming the equal prefix and suffix.
//! 2. [`anchored_diff`]: a patience-style alignment that only matches values
//!    unique to both sides and shows everything between them as block
//!    replacements.
//!
//! # Example
//!
//! ```
//! use linediff::{DiffRecord, diff};
//!
//! let left = ["one", "two", "three", ""];
//! let right = ["one", "five", "three", ""];
//!
//! assert_eq!(
//!     diff(&left, &right),
//!     vec![
//!         DiffRecord::common("one", 0, 0),
//!         DiffRecord::left_only("two", 1, 1),
//!         DiffRecord::right_only("five", 2, 1),
//!         DiffRecord::common("three", 2, 2),
//!         DiffRecord::common("", 3, 3),
//!     ]
//! );
//! ```
//!
//! All entry points are pure functions over borrowed input and are safe to
//! call concurrently from any number of threads.

pub mod aligner;
pub mod anchor;
pub mod blocks;
pub mod config;
pub mod error;
pub mod lcs;
pub mod record;
pub mod render;
pub mod text;
pub mod trim;

pub use aligner::{Aligner, align};
pub use anchor::{AnchoredAligner, anchored_diff, anchored_diff_with, find_anchors};
pub use blocks::{Block, DiffStats, group};
pub use config::{AnchorMode, DiffSettings, Strategy};
pub use error::{DiffError, Exhaustion};
pub use lcs::{LcsAligner, LcsMatrix, diff, try_diff};
pub use record::{Delta, DiffRecord};
pub use render::{HtmlRenderer, PlainRenderer, Renderer};
pub use text::{align_lines, anchored_diff_lines, diff_lines, split_lines};
pub use trim::{Bounds, count_equal_bounds};
