//! Entry points that run a policy over classified candidates.

use anyhow::Result;
use catalog::MovieSummary;
use tracing::debug;

use crate::classify::ClassifiedMovie;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{ExcludeAdultFilter, OriginFilter, ReleaseYearFilter, RequirePosterFilter};
use crate::policy::SelectionPolicy;
use crate::rank;

/// Build the filter chain a policy describes.
fn build_pipeline(policy: &SelectionPolicy) -> FilterPipeline {
    let mut pipeline = FilterPipeline::new();
    if policy.exclude_adult {
        pipeline = pipeline.add_filter(ExcludeAdultFilter);
    }
    if policy.require_poster {
        pipeline = pipeline.add_filter(RequirePosterFilter);
    }
    if !policy.allowed_origins.is_empty() {
        pipeline = pipeline.add_filter(OriginFilter::new(policy.allowed_origins.clone()));
    }
    if let Some(floor) = policy.min_release_year {
        pipeline = pipeline.add_filter(ReleaseYearFilter::new(floor));
    }
    pipeline
}

/// Filter and rank without truncating.
///
/// The orchestrator runs its poster verification between this call and the
/// final cut, so the full ranked order stays available to it.
pub fn filter_and_rank(
    candidates: Vec<ClassifiedMovie>,
    policy: &SelectionPolicy,
) -> Result<Vec<ClassifiedMovie>> {
    policy.validate()?;
    let mut kept = build_pipeline(policy).apply(candidates)?;
    rank::rank(&mut kept, policy.rank_key);
    debug!("{} candidates after filtering and ranking", kept.len());
    Ok(kept)
}

/// Run the full selection: filter, rank, truncate to the policy limit.
pub fn select(
    candidates: Vec<ClassifiedMovie>,
    policy: &SelectionPolicy,
) -> Result<Vec<MovieSummary>> {
    let mut ranked = filter_and_rank(candidates, policy)?;
    ranked.truncate(policy.limit);
    Ok(ranked.into_iter().map(|c| c.movie).collect())
}
