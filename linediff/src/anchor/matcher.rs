//! Patience-style anchor selection.
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Default, Clone, Copy)]
struct Occurrence {
    left_count: usize,
    right_count: usize,
    right_pos: usize,
}

impl Occurrence {
    const fn is_unique(&self) -> bool {
        self.left_count == 1 && self.right_count == 1
    }
}

/// Finds the anchors of two sequences.
///
/// A candidate is a value occurring exactly once in `left` and exactly once in
/// `right`. Candidates are taken in left order and the longest run strictly
/// increasing in right position is kept (patience sorting), so the returned
/// pairs are strictly increasing in both coordinates.
#[must_use]
pub fn find_anchors<T: Eq + Hash>(left: &[T], right: &[T]) -> Vec<(usize, usize)> {
    let candidates = unique_pairs(left, right);
    longest_increasing(&candidates)
}

/// Pairs of positions holding values unique to both sides, ordered by left position.
pub(crate) fn unique_pairs<T: Eq + Hash>(left: &[T], right: &[T]) -> Vec<(usize, usize)> {
    let mut table: HashMap<&T, Occurrence> = HashMap::with_capacity(left.len());
    for item in left {
        table.entry(item).or_default().left_count += 1;
    }
    for (j, item) in right.iter().enumerate() {
        if let Some(occurrence) = table.get_mut(item) {
            occurrence.right_count += 1;
            occurrence.right_pos = j;
        }
    }

    left.iter()
        .enumerate()
        .filter_map(|(i, item)| {
            table
                .get(item)
                .filter(|occurrence| occurrence.is_unique())
                .map(|occurrence| (i, occurrence.right_pos))
        })
        .collect()
}

/// Longest subsequence of `pairs` (sorted by left) strictly increasing in right.
fn longest_increasing(pairs: &[(usize, usize)]) -> Vec<(usize, usize)> {
    // tops[k] is the pair index ending the best run of length k + 1.
    let mut tops: Vec<usize> = Vec::new();
    let mut back: Vec<Option<usize>> = vec![None; pairs.len()];

    for (idx, &(_, right)) in pairs.iter().enumerate() {
        let pile = tops.partition_point(|&top| pairs[top].1 < right);
        if pile > 0 {
            back[idx] = Some(tops[pile - 1]);
        }
        if pile == tops.len() {
            tops.push(idx);
        } else {
            tops[pile] = idx;
        }
    }

    let mut anchors = Vec::with_capacity(tops.len());
    let mut cursor = tops.last().copied();
    while let Some(idx) = cursor {
        anchors.push(pairs[idx]);
        cursor = back[idx];
    }
    anchors.reverse();
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_values_are_not_candidates() {
        let left = ["alpha", "beta", "gama", "delta", "beta", "pi"];
        let right = ["solid", "liquid", "gas", "beta", "plasma"];
        assert!(find_anchors(&left, &right).is_empty());
    }

    #[test]
    fn test_unique_values_become_anchors() {
        let left = ["adagio", "vivace", "staccato legato", "presto", "lento"];
        let right = [
            "adagio adagio",
            "staccato",
            "staccato legato",
            "staccato",
            "legato",
            "allegro",
        ];
        assert_eq!(find_anchors(&left, &right), vec![(2, 2)]);
    }

    #[test]
    fn test_crossing_candidates_are_dropped() {
        // a b c d / c a b d: keeping (a, b, d) beats keeping (c, d).
        let left = ["a", "b", "c", "d"];
        let right = ["c", "a", "b", "d"];
        assert_eq!(
            unique_pairs(&left, &right),
            vec![(0, 1), (1, 2), (2, 0), (3, 3)]
        );
        assert_eq!(find_anchors(&left, &right), vec![(0, 1), (1, 2), (3, 3)]);
    }

    #[test]
    fn test_anchors_strictly_increase() {
        let left = ["e", "d", "c", "b", "a", "f"];
        let right = ["a", "b", "c", "d", "e", "f"];
        let anchors = find_anchors(&left, &right);
        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors.last(), Some(&(5, 5)));
        for pair in anchors.windows(2) {
            assert!(pair[0].0 < pair[1].0 && pair[0].1 < pair[1].1);
        }
    }

    #[test]
    fn test_empty() {
        let empty: [u8; 0] = [];
        assert!(find_anchors(&empty, &[1, 2]).is_empty());
        assert!(find_anchors(&[1, 2], &empty).is_empty());
    }
}
