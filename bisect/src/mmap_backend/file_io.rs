//! File I/O for sequence files
//!
//! A sequence file is the raw concatenation of its elements in host byte
//! order (little-endian on every supported target), with no header.

use bisect_core::SearchElement;
use memmap2::{Mmap, MmapOptions};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::debug;

use crate::Result;

/// Map a file read-only; empty files have nothing to map
pub(crate) fn map_file(path: &Path) -> Result<Option<Mmap>> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(None);
    }

    // SAFETY: the mapping is read-only and owned by the returned value.
    // Callers must not truncate the file while it is mapped.
    let mmap = unsafe { MmapOptions::new().map(&file)? };
    Ok(Some(mmap))
}

/// Write `values` as a sequence file readable by [`super::MmapSequence`]
///
/// Order is not checked here; open with `verify_sorted` to check it.
pub fn write_sequence<T: SearchElement, P: AsRef<Path>>(path: P, values: &[T]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(bytemuck::cast_slice(values))?;
    writer.flush()?;

    debug!(
        path = %path.display(),
        elements = values.len(),
        element_type = %T::element_type(),
        "wrote sequence file"
    );
    Ok(())
}
