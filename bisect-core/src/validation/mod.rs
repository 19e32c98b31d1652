//! Validation utilities around the search
//!
//! This module contains pure functions with no I/O dependencies: order
//! checks for sequences, layout checks for byte-backed storage and
//! parsing of textual input.

pub mod bounds;
pub mod order;
pub mod parsing;

pub use bounds::{element_count, validate_alignment, validate_array_bounds};
pub use order::{first_unsorted_index, is_sorted, validate_sorted};
#[cfg(feature = "alloc")]
pub use parsing::parse_sequence;
pub use parsing::{parse_integer, split_values};
