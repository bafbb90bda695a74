//! O(log n) and O(n) searching

use super::{timed, Timed};
use tracing_attributes::instrument;

/// Iterative halving over `sorted`. The input must be sorted in non-decreasing order; this is
/// not checked and unsorted input gives meaningless results.
#[instrument(level = "trace", skip_all, fields(len = sorted.len()))]
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Timed<Option<usize>> {
    timed(|| -> Option<usize> {
        // Inclusive window [low, high]
        let (mut low, mut high) = (0, sorted.len().checked_sub(1)?);
        while low <= high {
            let middle = low + (high - low) / 2;
            match sorted[middle].cmp(target) {
                std::cmp::Ordering::Equal => return Some(middle),
                std::cmp::Ordering::Less => low = middle + 1,
                std::cmp::Ordering::Greater => high = middle.checked_sub(1)?,
            }
        }
        None
    })
}

/// Index of the first element equal to `target`
#[instrument(level = "trace", skip_all, fields(len = data.len()))]
pub fn linear_search<T: PartialEq>(data: &[T], target: &T) -> Timed<Option<usize>> {
    timed(|| data.iter().position(|item| item == target))
}
