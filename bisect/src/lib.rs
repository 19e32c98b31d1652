//! Bisect - Binary search over sorted integer sequences
//!
//! This library searches sorted sequences held in memory or memory-mapped
//! from disk, singly or in parallel batches.
//!
//! ## Architecture
//!
//! Bisect follows a core/implementation separation:
//!
//! - **bisect-core**: the search routine, sequence traits, validation and
//!   parsing (`no_std`, no I/O)
//! - **bisect**: owned and file-backed sequences, batch search,
//!   configuration, logging and the `bisect` CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use bisect::{SearchConfig, SortedSequence, SortedVec};
//!
//! fn example() -> bisect::Result<()> {
//!     let config = SearchConfig::default().with_verify_sorted(true);
//!     let seq = SortedVec::<i32>::parse("1,2,3,4,5,6,7,8", &config)?;
//!
//!     assert_eq!(seq.search(&5), Some(4));
//!     println!("{}", seq.report(9)); // Index of 9: -1
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **mmap**: search sequence files without loading them
//! - **serde**: JSON configuration and report serialization
//! - **cli**: the `bisect` command line tool

// Re-export core abstractions
pub use bisect_core::{
    // Search routine
    binary_search, binary_search_by, from_sentinel, to_sentinel, NOT_FOUND,
    // Demonstration input
    DEMO_SEQUENCE, DEMO_TARGET,
    // Traits and element types
    ElementType, SearchElement, SortedSequence,
    // Errors
    BisectError,
    // Validation utilities
    is_sorted, parse_integer, validate_sorted,
};

pub mod batch;
pub mod config;
pub mod error;
#[cfg(feature = "mmap")]
pub mod mmap_backend;
pub mod report;
pub mod sequence;

pub use batch::{search_batch, search_reports};
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use report::SearchReport;
pub use sequence::SortedVec;

#[cfg(feature = "mmap")]
pub use mmap_backend::{write_sequence, MmapSequence};
