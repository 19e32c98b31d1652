//! Error types for bisect operations

/// Errors that can occur around a search
///
/// The search itself never fails; these cover parsing input, validating
/// byte-backed sequences and the opt-in sortedness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BisectError {
    /// Token is not a decimal integer
    InvalidNumber,
    /// Value does not fit the element type
    NumberOverflow,
    /// Sequence is not in non-decreasing order
    UnsortedInput,
    /// Byte length or address not aligned to the element size
    ArrayAlignment,
    /// Array too large for safe indexing
    ArraySizeOverflow,
    /// Unknown element type name
    UnknownElementType,
}

impl core::fmt::Display for BisectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            BisectError::InvalidNumber => "Invalid integer",
            BisectError::NumberOverflow => "Integer out of range for element type",
            BisectError::UnsortedInput => "Sequence is not sorted",
            BisectError::ArrayAlignment => "Array not aligned to element size",
            BisectError::ArraySizeOverflow => "Array too large",
            BisectError::UnknownElementType => "Unknown element type",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for BisectError {}

/// Result type for bisect-core operations
pub type Result<T> = core::result::Result<T, BisectError>;
