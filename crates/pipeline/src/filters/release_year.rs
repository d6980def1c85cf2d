//! Filter on release year floor.

use anyhow::Result;

use crate::classify::ClassifiedMovie;
use crate::traits::Filter;

/// Drops candidates released before the floor year.
///
/// Candidates without a release date report year 0 and are always dropped
/// when a floor is in effect.
pub struct ReleaseYearFilter {
    floor: i32,
}

impl ReleaseYearFilter {
    pub fn new(floor: i32) -> Self {
        Self { floor }
    }
}

impl Filter for ReleaseYearFilter {
    fn name(&self) -> &str {
        "ReleaseYearFilter"
    }

    fn apply(&self, candidates: Vec<ClassifiedMovie>) -> Result<Vec<ClassifiedMovie>> {
        Ok(candidates
            .into_iter()
            .filter(|candidate| candidate.movie.release_year() >= self.floor)
            .collect())
    }
}
