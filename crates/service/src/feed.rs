//! The site's built-in feeds and their selection policies.

use std::fmt;

use catalog::{Endpoint, QueryParams};
use chrono::NaiveDate;
use feeds::FeedPlan;
use feeds::library;
use pipeline::{Classification, RankKey, SelectionPolicy};

/// One of the site's standing rails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Trending,
    Korean,
    Japanese,
    Popular,
    NowPlaying,
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeedKind::Trending => "trending",
            FeedKind::Korean => "korean",
            FeedKind::Japanese => "japanese",
            FeedKind::Popular => "popular",
            FeedKind::NowPlaying => "now-playing",
        };
        write!(f, "{name}")
    }
}

impl FeedKind {
    /// The sub-queries this feed aggregates
    pub fn plan(self, today: NaiveDate) -> FeedPlan {
        match self {
            FeedKind::Trending => library::trending(today),
            FeedKind::Korean => library::korean(today),
            FeedKind::Japanese => library::regional("JP", today),
            FeedKind::Popular => FeedPlan::new().list(Endpoint::Popular, QueryParams::new()),
            FeedKind::NowPlaying => FeedPlan::new().list(Endpoint::NowPlaying, QueryParams::new()),
        }
    }

    /// The selection policy this feed ranks under.
    ///
    /// The Korean rail restricts origins instead of probing posters; every
    /// other rail admits all origins but asks the orchestrator to verify
    /// localized artwork for unclassified ones.
    pub fn policy(self) -> SelectionPolicy {
        match self {
            FeedKind::Korean => SelectionPolicy::default()
                .with_allowed_origins([Classification::Kr])
                .with_rank_key(RankKey::ReleaseRecency),
            FeedKind::Trending | FeedKind::Japanese | FeedKind::Popular | FeedKind::NowPlaying => {
                SelectionPolicy::default()
                    .with_unrestricted_origins()
                    .with_min_release_year(library::RECENT_FLOOR_YEAR)
                    .with_rank_key(RankKey::ReleaseRecency)
                    .with_local_poster_check()
            }
        }
    }
}

/// Policy for user-initiated searches: shorter list, popularity order, no
/// origin restriction
pub fn search_policy() -> SelectionPolicy {
    SelectionPolicy::default()
        .with_unrestricted_origins()
        .with_limit(10)
}

/// Policy for a detail page's recommendation rail
pub fn similar_policy() -> SelectionPolicy {
    SelectionPolicy::default().with_unrestricted_origins()
}
