//! Filter that drops adult-rated titles.

use anyhow::Result;

use crate::classify::ClassifiedMovie;
use crate::traits::Filter;

/// Removes candidates flagged as adult content
pub struct ExcludeAdultFilter;

impl Filter for ExcludeAdultFilter {
    fn name(&self) -> &str {
        "ExcludeAdultFilter"
    }

    fn apply(&self, candidates: Vec<ClassifiedMovie>) -> Result<Vec<ClassifiedMovie>> {
        Ok(candidates
            .into_iter()
            .filter(|candidate| !candidate.movie.adult)
            .collect())
    }
}
