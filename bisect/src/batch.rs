//! Batch search over many targets
//!
//! Every target is an independent read-only search, so large batches fan
//! out on the rayon pool while small ones stay on the calling thread.

use std::fmt::Debug;

use bisect_core::SortedSequence;
use rayon::prelude::*;
use tracing::debug;

use crate::{SearchConfig, SearchReport};

/// Search `seq` for every target, preserving target order
///
/// Runs in parallel once `targets.len()` reaches
/// `config.parallel_threshold`.
pub fn search_batch<S>(seq: &S, targets: &[S::Element], config: &SearchConfig) -> Vec<Option<usize>>
where
    S: SortedSequence + Sync + ?Sized,
    S::Element: Send + Sync + Debug,
{
    if targets.len() >= config.parallel_threshold.max(2) {
        debug!(
            targets = targets.len(),
            threads = rayon::current_num_threads(),
            "parallel batch search"
        );
        targets.par_iter().map(|target| seq.search(target)).collect()
    } else {
        debug!(targets = targets.len(), "sequential batch search");
        targets.iter().map(|target| seq.search(target)).collect()
    }
}

/// Like [`search_batch`], pairing each outcome with its target
pub fn search_reports<S>(
    seq: &S,
    targets: &[S::Element],
    config: &SearchConfig,
) -> Vec<SearchReport<S::Element>>
where
    S: SortedSequence + Sync + ?Sized,
    S::Element: Send + Sync + Debug,
{
    search_batch(seq, targets, config)
        .into_iter()
        .zip(targets)
        .map(|(index, &target)| SearchReport::new(target, index))
        .collect()
}
