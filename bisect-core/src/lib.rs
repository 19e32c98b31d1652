#![no_std]

//! Bisect Core - Binary search over sorted integer sequences
//!
//! This crate provides the search routine, the sorted sequence abstraction
//! and pure validation helpers. Nothing here performs I/O; allocation is
//! only used behind the `alloc` feature.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod constants;
pub mod error;
pub mod search;
pub mod traits;
pub mod validation;

pub use constants::{DEMO_SEQUENCE, DEMO_TARGET, NOT_FOUND};
pub use error::*;
pub use search::{binary_search, binary_search_by, from_sentinel, to_sentinel};
pub use traits::*;
pub use validation::{
    first_unsorted_index, is_sorted, parse_integer, split_values, validate_alignment,
    validate_array_bounds, validate_sorted,
};
#[cfg(feature = "alloc")]
pub use validation::parse_sequence;
