//! Sorted sequence abstraction
//!
//! Any random-access sequence whose elements are in non-decreasing order
//! can be searched through this trait, whatever backs its storage.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::search::binary_search_by;

/// Random-access sequence sorted in non-decreasing order
///
/// Sortedness is a precondition of [`SortedSequence::search`], not
/// something implementations are required to check.
pub trait SortedSequence {
    /// The element type stored in this sequence
    type Element: Ord + Copy;

    /// Number of elements
    fn len(&self) -> usize;

    /// Whether the sequence holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`
    ///
    /// Callers guarantee `index < self.len()`; implementations may panic
    /// otherwise.
    fn element_at(&self, index: usize) -> Self::Element;

    /// Find the index of an element equal to `target`
    ///
    /// Returns `None` when no element matches. With duplicates, the index
    /// returned is implementation-defined.
    fn search(&self, target: &Self::Element) -> Option<usize> {
        binary_search_by(self.len(), |i| self.element_at(i).cmp(target))
    }
}

impl<T: Ord + Copy> SortedSequence for [T] {
    type Element = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn element_at(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Ord + Copy, const N: usize> SortedSequence for [T; N] {
    type Element = T;

    fn len(&self) -> usize {
        N
    }

    fn element_at(&self, index: usize) -> T {
        self[index]
    }
}

#[cfg(feature = "alloc")]
impl<T: Ord + Copy> SortedSequence for Vec<T> {
    type Element = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element_at(&self, index: usize) -> T {
        self[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sequence computed on demand, never materialized
    struct Squares(usize);

    impl SortedSequence for Squares {
        type Element = u64;

        fn len(&self) -> usize {
            self.0
        }

        fn element_at(&self, index: usize) -> u64 {
            (index as u64) * (index as u64)
        }
    }

    #[test]
    fn test_slice_search() {
        let values: &[i32] = &[1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(values.search(&5), Some(4));
        assert_eq!(values.search(&9), None);
        assert!(!SortedSequence::is_empty(values));
    }

    #[test]
    fn test_array_search() {
        let values = [10u32, 20, 30];
        assert_eq!(SortedSequence::len(&values), 3);
        assert_eq!(values.search(&20), Some(1));
        assert_eq!(values.search(&25), None);

        let empty: [u32; 0] = [];
        assert!(SortedSequence::is_empty(&empty));
        assert_eq!(empty.search(&0), None);
    }

    #[test]
    fn test_computed_sequence() {
        let squares = Squares(1_000_000);
        assert_eq!(squares.search(&0), Some(0));
        assert_eq!(squares.search(&144), Some(12));
        assert_eq!(squares.search(&999_998_000_001), Some(999_999));
        assert_eq!(squares.search(&145), None);
        assert_eq!(Squares(0).search(&0), None);
    }
}
