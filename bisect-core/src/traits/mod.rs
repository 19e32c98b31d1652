//! Abstract interfaces for searchable sequences
//!
//! Traits here are pure interfaces plus the slice implementations; owned
//! and file-backed sequences live in the `bisect` crate.

pub mod element;
pub mod sequence;

pub use element::{ElementType, SearchElement};
pub use sequence::SortedSequence;
