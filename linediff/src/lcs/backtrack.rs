//! Walks an LCS table back into an edit script.
use super::matrix::LcsMatrix;
use crate::record::DiffRecord;

/// Produces the records for `left` and `right` from their LCS table.
///
/// The walk starts at `(m, n)` and is iterative. When moving left and moving up
/// cost the same, the walk moves left (`T[i][j-1] >= T[i-1][j]`), so after the
/// final reversal deletions come before insertions at any ambiguous point.
///
/// `left_offset` and `right_offset` are added to every emitted index so a
/// caller working on a trimmed region gets positions in the original inputs.
#[must_use]
pub fn backtrack<T: PartialEq + Clone>(
    left: &[T],
    right: &[T],
    matrix: &LcsMatrix,
    left_offset: usize,
    right_offset: usize,
) -> Vec<DiffRecord<T>> {
    let mut records = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (left.len(), right.len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && left[i - 1] == right[j - 1] {
            records.push(DiffRecord::common(
                left[i - 1].clone(),
                left_offset + i - 1,
                right_offset + j - 1,
            ));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || matrix.get(i, j - 1) >= matrix.get(i - 1, j)) {
            records.push(DiffRecord::right_only(
                right[j - 1].clone(),
                left_offset + i,
                right_offset + j - 1,
            ));
            j -= 1;
        } else {
            records.push(DiffRecord::left_only(
                left[i - 1].clone(),
                left_offset + i - 1,
                right_offset + j,
            ));
            i -= 1;
        }
    }

    records.reverse();
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Delta;

    fn run<'a>(left: &[&'a str], right: &[&'a str]) -> Vec<DiffRecord<&'a str>> {
        let matrix = LcsMatrix::build(left, right);
        backtrack(left, right, &matrix, 0, 0)
    }

    #[test]
    fn test_tie_break_puts_deletions_before_insertions() {
        let records = run(&["two"], &["five"]);
        assert_eq!(
            records,
            vec![
                DiffRecord::left_only("two", 0, 0),
                DiffRecord::right_only("five", 1, 0),
            ]
        );

        // Two-by-two block replace: both deletions, then both insertions.
        let records = run(&["a", "b"], &["c", "d"]);
        let deltas: Vec<Delta> = records.iter().map(|r| r.delta).collect();
        assert_eq!(
            deltas,
            vec![
                Delta::LeftOnly,
                Delta::LeftOnly,
                Delta::RightOnly,
                Delta::RightOnly,
            ]
        );
        assert_eq!(records[2], DiffRecord::right_only("c", 2, 0));
    }

    #[test]
    fn test_empty_sides() {
        assert!(run(&[], &[]).is_empty());
        assert_eq!(
            run(&["x", "y"], &[]),
            vec![
                DiffRecord::left_only("x", 0, 0),
                DiffRecord::left_only("y", 1, 0),
            ]
        );
        assert_eq!(
            run(&[], &["x", "y"]),
            vec![
                DiffRecord::right_only("x", 0, 0),
                DiffRecord::right_only("y", 0, 1),
            ]
        );
    }

    #[test]
    fn test_offsets_are_applied() {
        let left = ["p", "q"];
        let right = ["q"];
        let matrix = LcsMatrix::build(&left, &right);
        let records = backtrack(&left, &right, &matrix, 10, 20);
        assert_eq!(
            records,
            vec![DiffRecord::left_only("p", 10, 20), DiffRecord::common("q", 11, 20)]
        );
    }

    #[test]
    fn test_common_count_equals_lcs_len() {
        let left: Vec<char> = "mzjawxu".chars().collect();
        let right: Vec<char> = "xmjyauz".chars().collect();
        let matrix = LcsMatrix::build(&left, &right);
        let records = backtrack(&left, &right, &matrix, 0, 0);
        let common = records.iter().filter(|r| r.delta == Delta::Common).count();
        assert_eq!(common, matrix.lcs_len());
        assert_eq!(records.len(), left.len() + right.len() - common);
    }
}
