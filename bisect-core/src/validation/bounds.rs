//! Layout validation for byte-backed sequences
//!
//! A sequence stored as raw little-endian bytes can only be viewed as a
//! typed slice if its length is a whole number of elements and its start
//! address satisfies the element alignment.

use crate::{BisectError, ElementType};

/// Number of `T` elements held in `byte_len` bytes
///
/// Rejects lengths that leave a partial element or that exceed the
/// largest slice length addressable with `isize` offsets.
pub const fn validate_array_bounds<T>(byte_len: usize) -> Result<usize, BisectError> {
    element_count(byte_len, core::mem::size_of::<T>())
}

/// Number of elements of `element_size` bytes held in `byte_len` bytes
pub const fn element_count(byte_len: usize, element_size: usize) -> Result<usize, BisectError> {
    if element_size == 0 || byte_len % element_size != 0 {
        return Err(BisectError::ArrayAlignment);
    }

    if byte_len > isize::MAX as usize {
        return Err(BisectError::ArraySizeOverflow);
    }

    Ok(byte_len / element_size)
}

/// Check that `bytes` starts on an address aligned for `T`
pub fn validate_alignment<T>(bytes: &[u8]) -> Result<(), BisectError> {
    if (bytes.as_ptr() as usize) % core::mem::align_of::<T>() != 0 {
        return Err(BisectError::ArrayAlignment);
    }
    Ok(())
}

impl ElementType {
    /// Number of elements of this type held in `byte_len` bytes
    pub const fn element_count(self, byte_len: usize) -> Result<usize, BisectError> {
        element_count(byte_len, self.size_bytes())
    }
}
