//! Selection policy describing how a feed filters, ranks and caps
//! candidates.

use std::collections::HashSet;

use anyhow::{Result, bail};

use crate::classify::Classification;

/// Which attribute orders the ranked list. All keys sort descending; ties
/// break on ascending id so equal inputs always produce the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    Popularity,
    VoteCount,
    ReleaseRecency,
}

/// Declarative description of one feed's selection rules.
///
/// A policy is data, not behavior: [`crate::select`] turns it into a
/// concrete filter pipeline and ranking pass. Feeds construct policies
/// through the `with_*` builders off [`SelectionPolicy::default`].
#[derive(Debug, Clone)]
pub struct SelectionPolicy {
    /// Drop adult-flagged titles
    pub exclude_adult: bool,
    /// Drop titles without a poster path
    pub require_poster: bool,
    /// Keep only these origins; empty means unrestricted. Defaults to the
    /// three primary markets.
    pub allowed_origins: HashSet<Classification>,
    /// Drop titles released before this year
    pub min_release_year: Option<i32>,
    /// Ordering attribute for the ranked list
    pub rank_key: RankKey,
    /// Maximum length of the final list
    pub limit: usize,
    /// Whether the orchestrator should verify localized poster artwork
    /// for `Other`-classified titles before truncating. The pipeline
    /// itself never performs lookups; this flag is carried for the
    /// orchestration layer.
    pub local_poster_check: bool,
}

pub const DEFAULT_LIMIT: usize = 15;

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            exclude_adult: true,
            require_poster: true,
            allowed_origins: [Classification::Kr, Classification::Us, Classification::Jp].into(),
            min_release_year: None,
            rank_key: RankKey::Popularity,
            limit: DEFAULT_LIMIT,
            local_poster_check: false,
        }
    }
}

impl SelectionPolicy {
    pub fn with_allowed_origins(
        mut self,
        origins: impl IntoIterator<Item = Classification>,
    ) -> Self {
        self.allowed_origins = origins.into_iter().collect();
        self
    }

    /// Clear the origin allow-list entirely
    pub fn with_unrestricted_origins(mut self) -> Self {
        self.allowed_origins.clear();
        self
    }

    pub fn with_min_release_year(mut self, year: i32) -> Self {
        self.min_release_year = Some(year);
        self
    }

    pub fn with_rank_key(mut self, key: RankKey) -> Self {
        self.rank_key = key;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_local_poster_check(mut self) -> Self {
        self.local_poster_check = true;
        self
    }

    /// A zero limit can only be a configuration mistake; fail fast rather
    /// than silently producing empty feeds.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            bail!("selection policy limit must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        assert!(SelectionPolicy::default().validate().is_ok());
        assert_eq!(SelectionPolicy::default().limit, DEFAULT_LIMIT);
        assert_eq!(SelectionPolicy::default().allowed_origins.len(), 3);
    }

    #[test]
    fn unrestricted_origins_clears_the_allow_list() {
        let policy = SelectionPolicy::default().with_unrestricted_origins();
        assert!(policy.allowed_origins.is_empty());
    }

    #[test]
    fn zero_limit_is_rejected() {
        let policy = SelectionPolicy::default().with_limit(0);
        assert!(policy.validate().is_err());
    }

    #[test]
    fn builders_compose() {
        let policy = SelectionPolicy::default()
            .with_allowed_origins([Classification::Kr])
            .with_min_release_year(2020)
            .with_rank_key(RankKey::ReleaseRecency)
            .with_limit(10)
            .with_local_poster_check();
        assert!(policy.allowed_origins.contains(&Classification::Kr));
        assert_eq!(policy.min_release_year, Some(2020));
        assert_eq!(policy.rank_key, RankKey::ReleaseRecency);
        assert_eq!(policy.limit, 10);
        assert!(policy.local_poster_check);
    }
}
