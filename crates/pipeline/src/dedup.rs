//! Identity-based deduplication.
//!
//! The first occurrence of an id wins, which is what makes the aggregator's
//! sub-query declaration order meaningful: earlier sub-queries' copy of a
//! shared title is the one that survives.

use std::collections::HashSet;

use catalog::{MovieId, MovieSummary};
use tracing::debug;

use crate::classify::{ClassifiedMovie, classify};

/// Drop later duplicates by id, preserving order
pub fn dedup(candidates: Vec<MovieSummary>) -> Vec<MovieSummary> {
    let before = candidates.len();
    let mut seen: HashSet<MovieId> = HashSet::with_capacity(before);
    let unique: Vec<MovieSummary> = candidates
        .into_iter()
        .filter(|movie| seen.insert(movie.id))
        .collect();
    debug!("dedup kept {} of {} candidates", unique.len(), before);
    unique
}

/// Dedup, then tag every survivor with its origin classification
pub fn dedup_and_classify(candidates: Vec<MovieSummary>) -> Vec<ClassifiedMovie> {
    dedup(candidates)
        .into_iter()
        .map(|movie| {
            let classification = classify(&movie);
            ClassifiedMovie {
                movie,
                classification,
            }
        })
        .collect()
}
