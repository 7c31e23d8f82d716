//! Entry points for diffing text line by line.
//!
//! Text is split on `'\n'` with the trailing element kept, so `"a\n"` has two
//! lines: `"a"` and an empty final line. Two texts that both end in a newline
//! therefore always finish with a common empty record, which renderers use to
//! print the end-of-file line numbers.

use crate::anchor::anchored_diff;
use crate::config::DiffSettings;
use crate::error::DiffError;
use crate::lcs::diff;
use crate::record::DiffRecord;

/// Splits text on `'\n'`, keeping a trailing empty element.
///
/// `""` yields `[""]` and `"a\nb\n"` yields `["a", "b", ""]`.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Optimal line diff of two texts.
#[must_use]
pub fn diff_lines<'a>(left: &'a str, right: &'a str) -> Vec<DiffRecord<&'a str>> {
    diff(&split_lines(left), &split_lines(right))
}

/// Anchored line diff of two texts.
#[must_use]
pub fn anchored_diff_lines<'a>(left: &'a str, right: &'a str) -> Vec<DiffRecord<&'a str>> {
    anchored_diff(&split_lines(left), &split_lines(right))
}

/// Line diff of two texts using the strategy and budget in `settings`.
///
/// # Errors
/// Returns [`DiffError::ResourceExhausted`] if the optimal strategy exceeds
/// the matrix budget.
pub fn align_lines<'a>(
    left: &'a str,
    right: &'a str,
    settings: &DiffSettings,
) -> Result<Vec<DiffRecord<&'a str>>, DiffError> {
    crate::aligner::align(&split_lines(left), &split_lines(right), settings)
}
