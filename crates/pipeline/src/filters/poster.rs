//! Filter that requires a poster asset.
//!
//! A card or hero slide without artwork is not presentable, so titles
//! lacking a poster path never reach the rails.

use anyhow::Result;

use crate::classify::ClassifiedMovie;
use crate::traits::Filter;

/// Removes candidates without a poster path
pub struct RequirePosterFilter;

impl Filter for RequirePosterFilter {
    fn name(&self) -> &str {
        "RequirePosterFilter"
    }

    fn apply(&self, candidates: Vec<ClassifiedMovie>) -> Result<Vec<ClassifiedMovie>> {
        Ok(candidates
            .into_iter()
            .filter(|candidate| candidate.movie.poster_path.is_some())
            .collect())
    }
}
