//! Search outcomes paired with their targets

use std::fmt;

use bisect_core::to_sentinel;

/// Outcome of searching for one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchReport<T> {
    /// Value searched for
    pub target: T,
    /// Index of an equal element, if any
    pub index: Option<usize>,
}

impl<T> SearchReport<T> {
    pub fn new(target: T, index: Option<usize>) -> Self {
        Self { target, index }
    }

    /// Whether an equal element was found
    pub fn found(&self) -> bool {
        self.index.is_some()
    }

    /// Index in the `-1` for absent convention
    pub fn sentinel(&self) -> isize {
        to_sentinel(self.index)
    }
}

impl<T: fmt::Display> fmt::Display for SearchReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index of {}: {}", self.target, self.sentinel())
    }
}
