//! Binary search over sorted sequences
//!
//! The search keeps an inclusive `[low, high]` interval and probes its
//! midpoint until the target is found or the interval is empty. Each probe
//! strictly shrinks the interval, so the loop always terminates after at
//! most `floor(log2 n) + 1` comparisons.

use crate::constants::NOT_FOUND;
use core::cmp::Ordering;

/// Binary search driven by a comparison callback
///
/// `compare(i)` returns the ordering of the element at index `i` relative
/// to the target. Indices passed to the callback are always `< len`.
///
/// If several elements compare equal, the index returned is whichever one
/// the midpoint path reaches first. That is not necessarily the first or
/// last occurrence.
///
/// # Examples
///
/// ```
/// use bisect_core::binary_search_by;
///
/// let values = [10, 20, 30, 40];
/// assert_eq!(binary_search_by(values.len(), |i| values[i].cmp(&30)), Some(2));
/// assert_eq!(binary_search_by(values.len(), |i| values[i].cmp(&35)), None);
/// ```
pub fn binary_search_by<F>(len: usize, mut compare: F) -> Option<usize>
where
    F: FnMut(usize) -> Ordering,
{
    if len == 0 {
        return None;
    }

    let mut low = 0usize;
    let mut high = len - 1;

    while low <= high {
        // low + (high - low) / 2 never overflows, unlike (low + high) / 2
        let mid = low + (high - low) / 2;

        match compare(mid) {
            Ordering::Equal => return Some(mid),
            Ordering::Greater => {
                // [low, mid - 1] is empty when mid is the first index
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
            Ordering::Less => low = mid + 1,
        }
    }

    None
}

/// Find the index of `target` in a slice sorted in non-decreasing order
///
/// Returns `None` when the target is absent. Sortedness is not checked;
/// on unsorted input the result is unspecified but the call still
/// terminates without panicking.
///
/// # Examples
///
/// ```
/// use bisect_core::binary_search;
///
/// let values = [1, 2, 3, 4, 5, 6, 7, 8];
/// assert_eq!(binary_search(&values, &5), Some(4));
/// assert_eq!(binary_search(&values, &9), None);
/// ```
pub fn binary_search<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    binary_search_by(seq.len(), |i| seq[i].cmp(target))
}

/// Convert a search result to the `-1` sentinel convention
pub const fn to_sentinel(result: Option<usize>) -> isize {
    match result {
        Some(index) => index as isize,
        None => NOT_FOUND,
    }
}

/// Convert a sentinel index back to a search result
///
/// Any negative value means not found.
pub fn from_sentinel(value: isize) -> Option<usize> {
    usize::try_from(value).ok()
}
