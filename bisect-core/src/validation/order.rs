//! Sortedness checks
//!
//! The search never verifies order itself. These checks let callers opt in
//! when the input comes from an untrusted source.

use crate::{BisectError, SortedSequence};

/// Index of the first element smaller than its predecessor
///
/// Returns `None` when the whole sequence is in non-decreasing order.
pub fn first_unsorted_index<S>(seq: &S) -> Option<usize>
where
    S: SortedSequence + ?Sized,
{
    (1..seq.len()).find(|&i| seq.element_at(i) < seq.element_at(i - 1))
}

/// Whether the sequence is in non-decreasing order
pub fn is_sorted<S>(seq: &S) -> bool
where
    S: SortedSequence + ?Sized,
{
    first_unsorted_index(seq).is_none()
}

/// Fail with [`BisectError::UnsortedInput`] unless the sequence is sorted
pub fn validate_sorted<S>(seq: &S) -> Result<(), BisectError>
where
    S: SortedSequence + ?Sized,
{
    match first_unsorted_index(seq) {
        Some(_) => Err(BisectError::UnsortedInput),
        None => Ok(()),
    }
}
