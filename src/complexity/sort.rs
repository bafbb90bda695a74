//! O(n log n) and O(n²) sorting. Both sorts are stable and leave their input untouched.

use super::{timed, Timed};
use crate::DynamicSequence;
use tracing_attributes::instrument;

/// Top-down merge sort into a new sequence
#[instrument(level = "trace", skip_all, fields(len = data.len()))]
pub fn merge_sort<T: Ord + Clone>(data: &[T]) -> Timed<DynamicSequence<T>> {
    timed(|| sort_halves(data.to_vec()).into())
}

fn sort_halves<T: Ord>(mut data: Vec<T>) -> Vec<T> {
    if data.len() <= 1 {
        return data;
    }
    let right = data.split_off(data.len() / 2);
    merge(sort_halves(data), sort_halves(right))
}

/// Merges two sorted runs, taking from the left run on ties
fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if l <= r { left.next() } else { right.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

/// Repeated passes of adjacent swaps over a copy of `data`
#[instrument(level = "trace", skip_all, fields(len = data.len()))]
pub fn bubble_sort<T: Ord + Clone>(data: &[T]) -> Timed<DynamicSequence<T>> {
    timed(|| {
        let mut items = data.to_vec();
        let n = items.len();
        for pass in 0..n {
            for j in 0..n - pass - 1 {
                if items[j] > items[j + 1] {
                    items.swap(j, j + 1);
                }
            }
        }
        items.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log;

    /// Ordered by `key` only, so stability is observable through `tag`
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Tagged {
        key: u8,
        tag: char,
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    fn tagged() -> Vec<Tagged> {
        [(2, 'a'), (1, 'b'), (2, 'c'), (0, 'd'), (1, 'e')]
            .into_iter()
            .map(|(key, tag)| Tagged { key, tag })
            .collect()
    }

    #[test_log::test]
    fn test_merge_sort() {
        let data = [5, 2, 9, 1, 5, 6];
        assert_eq!(merge_sort(&data).result.as_slice(), &[1, 2, 5, 5, 6, 9]);
        assert_eq!(data, [5, 2, 9, 1, 5, 6]);
        assert!(merge_sort::<i64>(&[]).result.is_empty());
        assert_eq!(merge_sort(&[7]).result.as_slice(), &[7]);
    }

    #[test_log::test]
    fn test_bubble_sort() {
        let data = [3, -1, 2, -1, 0];
        assert_eq!(bubble_sort(&data).result.as_slice(), &[-1, -1, 0, 2, 3]);
        assert!(bubble_sort::<i64>(&[]).result.is_empty());
    }

    #[test]
    fn test_stability() {
        let expected = "dbeac";
        let tags = |sorted: DynamicSequence<Tagged>| sorted.iter().map(|t| t.tag).collect::<String>();
        assert_eq!(tags(merge_sort(&tagged()).result), expected);
        assert_eq!(tags(bubble_sort(&tagged()).result), expected);
    }
}
