//! Anchored (patience-style) alignment.
//!
//! Only values that occur exactly once on each side are ever matched. The
//! spans between anchors are shown as a block of deletions followed by a block
//! of insertions, so two arbitrary occurrences of a common line are never
//! paired. The result can contain fewer common records than [`crate::diff`],
//! but it avoids misleading matches across repeated lines.
//!
//! The walk is iterative over an explicit task stack, which keeps
//! [`AnchorMode::Recursive`] from growing the call stack.

pub mod matcher;

pub use matcher::find_anchors;

use core::hash::Hash;
use core::ops::Range;

use tracing::{debug, trace};

use crate::aligner::Aligner;
use crate::config::AnchorMode;
use crate::error::DiffError;
use crate::record::DiffRecord;
use crate::trim::Bounds;

/// Computes the single-pass anchored alignment of two sequences.
#[must_use]
pub fn anchored_diff<T: Eq + Hash + Clone>(left: &[T], right: &[T]) -> Vec<DiffRecord<T>> {
    anchored_diff_with(left, right, AnchorMode::SinglePass)
}

/// Computes the anchored alignment with the given gap handling.
#[must_use]
pub fn anchored_diff_with<T: Eq + Hash + Clone>(
    left: &[T],
    right: &[T],
    mode: AnchorMode,
) -> Vec<DiffRecord<T>> {
    let mut records = Vec::with_capacity(left.len() + right.len());
    let mut tasks = vec![Task::Region {
        left: 0..left.len(),
        right: 0..right.len(),
        top_level: true,
    }];

    while let Some(task) = tasks.pop() {
        match task {
            Task::Equal { left: span, right_start } => {
                let common = span
                    .enumerate()
                    .map(|(k, i)| DiffRecord::common(left[i].clone(), i, right_start + k));
                records.extend(common);
            }
            Task::Block { left: lg, right: rg } => {
                trace!(left = lg.len(), right = rg.len(), "Emitting block replace");
                let (left_end, right_start) = (lg.end, rg.start);
                records.extend(lg.map(|i| DiffRecord::left_only(left[i].clone(), i, right_start)));
                records.extend(rg.map(|j| DiffRecord::right_only(right[j].clone(), left_end, j)));
            }
            Task::Region {
                left: lr,
                right: rr,
                top_level,
            } => plan_region(left, right, lr, rr, top_level, mode, &mut tasks),
        }
    }

    records
}

enum Task {
    /// Trim, anchor and split a region.
    Region {
        left: Range<usize>,
        right: Range<usize>,
        top_level: bool,
    },
    /// Emit a run of common records.
    Equal {
        left: Range<usize>,
        right_start: usize,
    },
    /// Emit every left element, then every right element.
    Block {
        left: Range<usize>,
        right: Range<usize>,
    },
}

/// Pushes the tasks for one region in reverse emission order.
fn plan_region<T: Eq + Hash>(
    left: &[T],
    right: &[T],
    lr: Range<usize>,
    rr: Range<usize>,
    top_level: bool,
    mode: AnchorMode,
    tasks: &mut Vec<Task>,
) {
    let bounds = Bounds::of(&left[lr.clone()], &right[rr.clone()]);
    let lm = lr.start + bounds.prefix..lr.end - bounds.suffix;
    let rm = rr.start + bounds.prefix..rr.end - bounds.suffix;
    let anchors = find_anchors(&left[lm.clone()], &right[rm.clone()]);

    if top_level {
        debug!(
            prefix = bounds.prefix,
            suffix = bounds.suffix,
            anchors = anchors.len(),
            "Aligning middle region on unique anchors"
        );
    } else {
        trace!(
            left = lm.len(),
            right = rm.len(),
            anchors = anchors.len(),
            "Refining gap"
        );
    }

    tasks.push(Task::Equal {
        left: lm.end..lr.end,
        right_start: rm.end,
    });

    let gap = |lg: Range<usize>, rg: Range<usize>| {
        if lg.is_empty() && rg.is_empty() {
            None
        } else if mode == AnchorMode::Recursive && !anchors.is_empty() {
            Some(Task::Region {
                left: lg,
                right: rg,
                top_level: false,
            })
        } else {
            Some(Task::Block {
                left: lg,
                right: rg,
            })
        }
    };

    // Walk anchors back to front so the stack pops them in order.
    let (mut left_end, mut right_end) = (lm.end, rm.end);
    for &(al, ar) in anchors.iter().rev() {
        let (al, ar) = (lm.start + al, rm.start + ar);
        tasks.extend(gap(al + 1..left_end, ar + 1..right_end));
        tasks.push(Task::Equal {
            left: al..al + 1,
            right_start: ar,
        });
        (left_end, right_end) = (al, ar);
    }
    tasks.extend(gap(lm.start..left_end, rm.start..right_end));

    tasks.push(Task::Equal {
        left: lr.start..lm.start,
        right_start: rr.start,
    });
}

/// [`Aligner`] running the anchored strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchoredAligner {
    mode: AnchorMode,
}

impl AnchoredAligner {
    /// Creates a single-pass aligner.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: AnchorMode::SinglePass,
        }
    }

    /// Creates an aligner with the given gap handling.
    #[must_use]
    pub const fn with_mode(mode: AnchorMode) -> Self {
        Self { mode }
    }

    /// Returns the gap handling mode.
    #[must_use]
    pub const fn mode(&self) -> AnchorMode {
        self.mode
    }
}

impl Aligner for AnchoredAligner {
    fn name(&self) -> &'static str {
        match self.mode {
            AnchorMode::SinglePass => "anchored",
            AnchorMode::Recursive => "anchored-recursive",
        }
    }

    fn align<T>(&self, left: &[T], right: &[T]) -> Result<Vec<DiffRecord<T>>, DiffError>
    where
        T: Eq + Hash + Clone,
    {
        Ok(anchored_diff_with(left, right, self.mode))
    }
}
