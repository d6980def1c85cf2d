//! Filter on origin classification.

use std::collections::HashSet;

use anyhow::Result;

use crate::classify::{Classification, ClassifiedMovie};
use crate::traits::Filter;

/// Keeps candidates whose classification is in the allow-list.
///
/// An empty allow-list means no origin restriction; the policy layer skips
/// constructing this filter in that case, but the behavior is kept
/// consistent here as well.
pub struct OriginFilter {
    allowed: HashSet<Classification>,
}

impl OriginFilter {
    pub fn new(allowed: HashSet<Classification>) -> Self {
        Self { allowed }
    }
}

impl Filter for OriginFilter {
    fn name(&self) -> &str {
        "OriginFilter"
    }

    fn apply(&self, candidates: Vec<ClassifiedMovie>) -> Result<Vec<ClassifiedMovie>> {
        if self.allowed.is_empty() {
            return Ok(candidates);
        }
        Ok(candidates
            .into_iter()
            .filter(|candidate| self.allowed.contains(&candidate.classification))
            .collect())
    }
}
