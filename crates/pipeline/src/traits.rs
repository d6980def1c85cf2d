//! Core trait for the filtering pipeline.

use anyhow::Result;

use crate::classify::ClassifiedMovie;

/// Core trait for filtering classified candidates.
///
/// Filters take ownership of the candidate vector and return the kept
/// subset, so chaining does not clone. `Send + Sync` allows a built
/// pipeline to be shared across concurrent feed runs.
pub trait Filter: Send + Sync {
    /// Name of this filter, used for logging
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates
    fn apply(&self, candidates: Vec<ClassifiedMovie>) -> Result<Vec<ClassifiedMovie>>;
}
