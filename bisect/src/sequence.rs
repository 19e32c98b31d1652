//! Owned sorted sequences
//!
//! `SortedVec` holds values in memory and searches them through the core
//! routine, logging the probe count of every search at `trace` level.

use std::fmt::Debug;

use bisect_core::{
    binary_search_by, first_unsorted_index, parse_sequence, SearchElement, SortedSequence,
};
use tracing::trace;

use crate::{Result, SearchConfig, SearchError, SearchReport};

/// Search any sorted sequence, tracing how many elements were probed
pub(crate) fn traced_search<S>(seq: &S, target: &S::Element) -> Option<usize>
where
    S: SortedSequence + ?Sized,
    S::Element: Debug,
{
    let mut probes = 0u32;
    let result = binary_search_by(seq.len(), |i| {
        probes += 1;
        seq.element_at(i).cmp(target)
    });
    trace!(len = seq.len(), ?target, probes, ?result, "binary search");
    result
}

/// Fail with the offending position unless `seq` is in non-decreasing order
pub(crate) fn ensure_sorted<S>(seq: &S) -> Result<()>
where
    S: SortedSequence + ?Sized,
{
    match first_unsorted_index(seq) {
        Some(index) => Err(SearchError::Unsorted { index }),
        None => Ok(()),
    }
}

/// In-memory sequence sorted in non-decreasing order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortedVec<T> {
    values: Vec<T>,
}

impl<T: Ord + Copy + Debug> SortedVec<T> {
    /// Wrap values after checking they are sorted
    pub fn from_sorted(values: Vec<T>) -> Result<Self> {
        ensure_sorted(values.as_slice())?;
        Ok(Self { values })
    }

    /// Wrap values without checking order
    ///
    /// Searching an unsorted sequence gives unspecified results.
    pub fn from_unchecked(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Wrap values, checking order only if the config asks for it
    pub fn with_config(values: Vec<T>, config: &SearchConfig) -> Result<Self> {
        if config.verify_sorted {
            Self::from_sorted(values)
        } else {
            Ok(Self::from_unchecked(values))
        }
    }

    /// Borrow the values
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Take back the values
    pub fn into_inner(self) -> Vec<T> {
        self.values
    }
}

impl<T: SearchElement> SortedVec<T> {
    /// Parse a comma or whitespace separated list such as `"1, 2, 3"`
    pub fn parse(s: &str, config: &SearchConfig) -> Result<Self> {
        let values = parse_sequence::<T>(s)?;
        Self::with_config(values, config)
    }

    /// Search for `target` and pair the outcome with it
    pub fn report(&self, target: T) -> SearchReport<T> {
        SearchReport::new(target, self.search(&target))
    }
}

impl<T: Ord + Copy + Debug> SortedSequence for SortedVec<T> {
    type Element = T;

    fn len(&self) -> usize {
        self.values.len()
    }

    fn element_at(&self, index: usize) -> T {
        self.values[index]
    }

    fn search(&self, target: &T) -> Option<usize> {
        traced_search(self.values.as_slice(), target)
    }
}
