//! Integer element types for searchable sequences
//!
//! This module defines the trait that constrains what types can be
//! stored in byte-backed sequences and parsed from text.

use crate::validation::parsing::parse_i128;
use crate::BisectError;

/// Element type tag for sequences whose type is only known at runtime
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ElementType {
    /// 32-bit signed integer
    #[default]
    I32 = 0,
    /// 64-bit signed integer
    I64 = 1,
    /// 32-bit unsigned integer
    U32 = 2,
    /// 64-bit unsigned integer
    U64 = 3,
}

impl ElementType {
    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ElementType::I32),
            1 => Some(ElementType::I64),
            2 => Some(ElementType::U32),
            3 => Some(ElementType::U64),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Get the size in bytes for this element type
    pub const fn size_bytes(self) -> usize {
        match self {
            ElementType::I32 | ElementType::U32 => 4,
            ElementType::I64 | ElementType::U64 => 8,
        }
    }

    /// Lowercase type name, as accepted by [`ElementType::from_name`]
    pub const fn name(self) -> &'static str {
        match self {
            ElementType::I32 => "i32",
            ElementType::I64 => "i64",
            ElementType::U32 => "u32",
            ElementType::U64 => "u64",
        }
    }

    /// Parse a type name such as `"i32"` (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self, BisectError> {
        [
            ElementType::I32,
            ElementType::I64,
            ElementType::U32,
            ElementType::U64,
        ]
        .into_iter()
        .find(|ty| ty.name().eq_ignore_ascii_case(name))
        .ok_or(BisectError::UnknownElementType)
    }
}

impl core::fmt::Display for ElementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for ElementType {
    type Err = BisectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Trait for integer types that can be searched in byte-backed sequences
///
/// All element types must be:
/// - Ord: totally ordered, so bisection is meaningful
/// - Pod: castable from raw little-endian bytes without copying
/// - Send + Sync: shareable across batch search workers
pub trait SearchElement:
    Copy
    + Ord
    + bytemuck::Pod
    + core::fmt::Debug
    + core::fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Get the runtime tag for this element type
    fn element_type() -> ElementType;

    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Parse a decimal literal with an optional sign
    fn from_decimal(s: &str) -> Result<Self, BisectError>;
}

macro_rules! impl_search_element {
    ($type:ty, $variant:ident) => {
        impl SearchElement for $type {
            fn element_type() -> ElementType {
                ElementType::$variant
            }

            fn from_decimal(s: &str) -> Result<Self, BisectError> {
                <$type>::try_from(parse_i128(s)?).map_err(|_| BisectError::NumberOverflow)
            }
        }
    };
}

impl_search_element!(i32, I32);
impl_search_element!(i64, I64);
impl_search_element!(u32, U32);
impl_search_element!(u64, U64);
