//! Built-in feed plans for the site's rails.
//!
//! Each function mirrors one rail: the most recent release windows are
//! queried first so that, after first-occurrence dedup, the freshest copy of
//! a title is the one that survives.

use catalog::{Endpoint, MovieDetail, QueryParams, SortKey};
use chrono::{Datelike, NaiveDate};

use crate::plan::{FeedPlan, PinnedEntry};

/// Oldest release year the open-ended discovery windows reach back to
pub const RECENT_FLOOR_YEAR: i32 = 2020;

fn year_window(year: i32) -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(year, 1, 1).expect("jan 1 is valid"),
        NaiveDate::from_ymd_opt(year, 12, 31).expect("dec 31 is valid"),
    )
}

fn discover_year(year: i32) -> QueryParams {
    let (from, to) = year_window(year);
    QueryParams::new()
        .released_between(from, to)
        .sort_by(SortKey::PopularityDesc)
}

fn recent_floor() -> NaiveDate {
    year_window(RECENT_FLOOR_YEAR).0
}

/// Trending rail: this year's and last year's popular releases, then the
/// daily and weekly trending charts.
pub fn trending(today: NaiveDate) -> FeedPlan {
    let year = today.year();
    FeedPlan::new()
        .list(Endpoint::Discover, discover_year(year))
        .list(Endpoint::Discover, discover_year(year - 1))
        .list(Endpoint::TrendingDay, QueryParams::new())
        .list(Endpoint::TrendingWeek, QueryParams::new())
}

/// Korean rail: recent Korean-language and Korean-production discovery plus
/// what is playing in KR theaters right now.
pub fn korean(today: NaiveDate) -> FeedPlan {
    let year = today.year();
    FeedPlan::new()
        .list(
            Endpoint::Discover,
            discover_year(year).original_language("ko"),
        )
        .list(
            Endpoint::Discover,
            discover_year(year - 1).original_language("ko"),
        )
        .list(
            Endpoint::Discover,
            QueryParams::new()
                .original_language("ko")
                .released_since(recent_floor())
                .sort_by(SortKey::ReleaseDateDesc),
        )
        .list(
            Endpoint::Discover,
            QueryParams::new()
                .production_country("KR")
                .released_since(recent_floor())
                .sort_by(SortKey::ReleaseDateDesc),
        )
        .list(Endpoint::NowPlaying, QueryParams::new())
}

/// Regional rail (US box office, JP releases, KR now-playing and so on)
pub fn regional(region: &str, today: NaiveDate) -> FeedPlan {
    let year = today.year();
    FeedPlan::new()
        .list(Endpoint::Discover, discover_year(year).region(region))
        .list(Endpoint::Discover, discover_year(year - 1).region(region))
        .list(Endpoint::Popular, QueryParams::new().region(region))
        .list(Endpoint::NowPlaying, QueryParams::new().region(region))
}

/// Search feed: a single sub-query around the user's text
pub fn search(query: &str) -> FeedPlan {
    FeedPlan::new().list(Endpoint::Search, QueryParams::new().query(query))
}

/// Recommendation rail for a detail page: recent same-genre discovery, then
/// the catalog's own similar-titles list.
pub fn similar_to(detail: &MovieDetail, today: NaiveDate) -> FeedPlan {
    let year = today.year();
    let genre_ids: Vec<u64> = detail.genres.iter().take(2).map(|genre| genre.id).collect();

    let mut plan = FeedPlan::new();
    if !genre_ids.is_empty() {
        plan = plan
            .list(Endpoint::Discover, discover_year(year).genres(&genre_ids))
            .list(
                Endpoint::Discover,
                discover_year(year - 1).genres(&genre_ids),
            );
    }
    plan.list(Endpoint::Similar(detail.id), QueryParams::new())
}

/// Curated hero rail from a fixed pin list
pub fn pinned(entries: Vec<PinnedEntry>) -> FeedPlan {
    FeedPlan::new().pinned(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::SubQuery;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn trending_opens_with_current_year_discovery() {
        let plan = trending(today());
        assert_eq!(plan.len(), 4);
        assert!(matches!(
            plan.sub_queries()[0],
            SubQuery::List {
                endpoint: Endpoint::Discover,
                ..
            }
        ));
        assert!(matches!(
            plan.sub_queries()[3],
            SubQuery::List {
                endpoint: Endpoint::TrendingWeek,
                ..
            }
        ));
    }

    #[test]
    fn korean_ends_with_now_playing() {
        let plan = korean(today());
        assert_eq!(plan.len(), 5);
        assert!(matches!(
            plan.sub_queries()[4],
            SubQuery::List {
                endpoint: Endpoint::NowPlaying,
                ..
            }
        ));
    }

    #[test]
    fn similar_to_without_genres_only_uses_similar_endpoint() {
        let detail: MovieDetail =
            serde_json::from_str(r#"{"id": 42, "title": "No Genres"}"#).unwrap();
        let plan = similar_to(&detail, today());
        assert_eq!(plan.len(), 1);
        assert!(matches!(
            plan.sub_queries()[0],
            SubQuery::List {
                endpoint: Endpoint::Similar(42),
                ..
            }
        ));
    }

    #[test]
    fn similar_to_limits_genres_to_two() {
        let detail: MovieDetail = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Many Genres",
                "genres": [
                    {"id": 28, "name": "Action"},
                    {"id": 18, "name": "Drama"},
                    {"id": 35, "name": "Comedy"}
                ]
            }"#,
        )
        .unwrap();
        let plan = similar_to(&detail, today());
        assert_eq!(plan.len(), 3);
    }
}
