//! Search configuration

use bisect_core::ElementType;
#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use crate::Result;

/// Default batch size at which targets are searched in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Configuration for loading sequences and running batch searches
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Check order when a sequence is loaded and reject unsorted input
    pub verify_sorted: bool,
    /// Minimum number of targets for a batch to fan out on the rayon pool
    pub parallel_threshold: usize,
    /// Element type of sequences read from text or files
    pub element_type: ElementType,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            verify_sorted: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            element_type: ElementType::I32,
        }
    }
}

impl SearchConfig {
    /// Enable or disable the order check on load
    pub fn with_verify_sorted(mut self, verify_sorted: bool) -> Self {
        self.verify_sorted = verify_sorted;
        self
    }

    /// Set the batch size at which searches run in parallel
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Set the element type used for text and file input
    pub fn with_element_type(mut self, element_type: ElementType) -> Self {
        self.element_type = element_type;
        self
    }

    /// Parse configuration from JSON; missing fields keep their defaults
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    #[cfg(feature = "serde")]
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
