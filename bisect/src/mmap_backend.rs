//! Memory-mapped sequence files
//!
//! This module searches sorted sequences stored on disk without reading
//! them into memory: the file is mapped read-only and viewed as a typed
//! slice after its size and alignment have been validated.

mod file_io;

pub use file_io::write_sequence;

use bisect_core::{validate_alignment, validate_array_bounds, SearchElement, SortedSequence};
use memmap2::Mmap;
use std::{marker::PhantomData, path::Path};
use tracing::info;

use crate::sequence::{ensure_sorted, traced_search};
use crate::{Result, SearchConfig};

/// Sorted sequence backed by a read-only memory mapping
pub struct MmapSequence<T: SearchElement> {
    // None for empty files, which cannot be mapped
    mmap: Option<Mmap>,
    len: usize,
    _phantom: PhantomData<T>,
}

impl<T: SearchElement> MmapSequence<T> {
    /// Map a sequence file of `T` elements
    ///
    /// Fails if the file size is not a whole number of elements, or, with
    /// `config.verify_sorted`, if the elements are out of order.
    pub fn open<P: AsRef<Path>>(path: P, config: &SearchConfig) -> Result<Self> {
        let path = path.as_ref();
        let mmap = file_io::map_file(path)?;

        let bytes: &[u8] = mmap.as_deref().unwrap_or_default();
        if !bytes.is_empty() {
            validate_alignment::<T>(bytes)?;
        }
        let len = validate_array_bounds::<T>(bytes.len())?;

        let sequence = Self {
            mmap,
            len,
            _phantom: PhantomData,
        };

        if config.verify_sorted {
            ensure_sorted(&sequence)?;
        }

        info!(
            path = %path.display(),
            elements = len,
            element_type = %T::element_type(),
            "mapped sequence file"
        );
        Ok(sequence)
    }

    /// View the mapped elements
    pub fn as_slice(&self) -> &[T] {
        match &self.mmap {
            // Size and alignment were validated in `open`
            Some(mmap) => bytemuck::cast_slice(&mmap[..]),
            None => &[],
        }
    }
}

impl<T: SearchElement> SortedSequence for MmapSequence<T> {
    type Element = T;

    fn len(&self) -> usize {
        self.len
    }

    fn element_at(&self, index: usize) -> T {
        self.as_slice()[index]
    }

    fn search(&self, target: &T) -> Option<usize> {
        traced_search(self.as_slice(), target)
    }
}

impl<T: SearchElement> std::fmt::Debug for MmapSequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MmapSequence")
            .field("element_type", &T::element_type())
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchError;
    use bisect_core::BisectError;

    #[test]
    fn test_round_trip_search() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eight.seq");
        write_sequence(&path, &[1i32, 2, 3, 4, 5, 6, 7, 8]).unwrap();

        let seq = MmapSequence::<i32>::open(&path, &SearchConfig::default()).unwrap();
        assert_eq!(seq.len(), 8);
        assert_eq!(seq.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(seq.search(&5), Some(4));
        assert_eq!(seq.search(&9), None);
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.seq");
        write_sequence::<u64, _>(&path, &[]).unwrap();

        let seq = MmapSequence::<u64>::open(&path, &SearchConfig::default()).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.search(&0), None);
    }

    #[test]
    fn test_partial_element_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.seq");
        std::fs::write(&path, [0u8; 6]).unwrap();

        let err = MmapSequence::<i32>::open(&path, &SearchConfig::default()).unwrap_err();
        assert!(matches!(err, SearchError::Core(BisectError::ArrayAlignment)));
    }

    #[test]
    fn test_verify_sorted_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unsorted.seq");
        write_sequence(&path, &[3i64, 1, 2]).unwrap();

        let strict = SearchConfig::default().with_verify_sorted(true);
        let err = MmapSequence::<i64>::open(&path, &strict).unwrap_err();
        assert!(matches!(err, SearchError::Unsorted { index: 1 }));

        assert!(MmapSequence::<i64>::open(&path, &SearchConfig::default()).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MmapSequence::<i32>::open(dir.path().join("nope.seq"), &SearchConfig::default())
            .unwrap_err();
        assert!(matches!(err, SearchError::Io(_)));
    }

    #[test]
    fn test_wide_elements() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.seq");
        let values: Vec<u64> = (0..1000).map(|i| i * 1_000_000_007).collect();
        write_sequence(&path, &values).unwrap();

        let seq = MmapSequence::<u64>::open(&path, &SearchConfig::default()).unwrap();
        assert_eq!(seq.search(&(500 * 1_000_000_007)), Some(500));
        assert_eq!(seq.search(&1), None);
    }
}
