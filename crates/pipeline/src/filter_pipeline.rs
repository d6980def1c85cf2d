//! The FilterPipeline chains multiple filters together.

use anyhow::Result;
use tracing::debug;

use crate::classify::ClassifiedMovie;
use crate::traits::Filter;

/// Chains multiple filters into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ExcludeAdultFilter)
///     .add_filter(RequirePosterFilter)
///     .add_filter(ReleaseYearFilter::new(2020));
///
/// let kept = pipeline.apply(candidates)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern)
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in order, logging per-filter input/output counts
    pub fn apply(&self, candidates: Vec<ClassifiedMovie>) -> Result<Vec<ClassifiedMovie>> {
        let mut current = candidates;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current)?;
            debug!(
                "filter {}: {} -> {} candidates",
                filter.name(),
                before,
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
