//! Error types for bisect

use bisect_core::BisectError;
use thiserror::Error;

/// Result type alias for bisect operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised while preparing a sequence or its targets
///
/// Searching itself cannot fail: an absent target is `None`, not an error.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Parsing or layout error from the core crate
    #[error("{0}")]
    Core(#[from] BisectError),

    /// Order check failed
    #[error("Sequence is not sorted: element {index} is smaller than its predecessor")]
    Unsorted { index: usize },

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
