//! Deterministic ordering of filtered candidates.

use std::cmp::Ordering;

use crate::classify::ClassifiedMovie;
use crate::policy::RankKey;

/// Sort candidates descending by the rank key, ascending by id on ties.
///
/// Floats compare through `total_cmp` so a NaN popularity from a bad
/// payload cannot poison the sort. A missing release date sorts after
/// every dated title under `ReleaseRecency`.
pub fn rank(candidates: &mut [ClassifiedMovie], key: RankKey) {
    candidates.sort_by(|a, b| {
        compare_by_key(a, b, key).then_with(|| a.movie.id.cmp(&b.movie.id))
    });
}

fn compare_by_key(a: &ClassifiedMovie, b: &ClassifiedMovie, key: RankKey) -> Ordering {
    match key {
        RankKey::Popularity => b.movie.popularity.total_cmp(&a.movie.popularity),
        RankKey::VoteCount => b.movie.vote_count.cmp(&a.movie.vote_count),
        // Option<NaiveDate> orders None first, so reversing puts undated
        // titles last.
        RankKey::ReleaseRecency => b.movie.release_date.cmp(&a.movie.release_date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classification;
    use catalog::MovieSummary;
    use chrono::NaiveDate;

    fn candidate(id: u64, movie: MovieSummary) -> ClassifiedMovie {
        ClassifiedMovie {
            movie: MovieSummary { id, ..movie },
            classification: Classification::Kr,
        }
    }

    fn ids(candidates: &[ClassifiedMovie]) -> Vec<u64> {
        candidates.iter().map(|c| c.movie.id).collect()
    }

    #[test]
    fn popularity_sorts_descending() {
        let mut candidates = vec![
            candidate(
                1,
                MovieSummary {
                    popularity: 10.0,
                    ..MovieSummary::default()
                },
            ),
            candidate(
                2,
                MovieSummary {
                    popularity: 99.5,
                    ..MovieSummary::default()
                },
            ),
            candidate(
                3,
                MovieSummary {
                    popularity: 50.0,
                    ..MovieSummary::default()
                },
            ),
        ];
        rank(&mut candidates, RankKey::Popularity);
        assert_eq!(ids(&candidates), vec![2, 3, 1]);
    }

    #[test]
    fn ties_break_on_ascending_id() {
        let mut candidates = vec![
            candidate(
                7,
                MovieSummary {
                    popularity: 1.0,
                    ..MovieSummary::default()
                },
            ),
            candidate(
                3,
                MovieSummary {
                    popularity: 1.0,
                    ..MovieSummary::default()
                },
            ),
            candidate(
                5,
                MovieSummary {
                    popularity: 1.0,
                    ..MovieSummary::default()
                },
            ),
        ];
        rank(&mut candidates, RankKey::Popularity);
        assert_eq!(ids(&candidates), vec![3, 5, 7]);
    }

    #[test]
    fn recency_places_undated_titles_last() {
        let mut candidates = vec![
            candidate(
                1,
                MovieSummary {
                    release_date: None,
                    ..MovieSummary::default()
                },
            ),
            candidate(
                2,
                MovieSummary {
                    release_date: NaiveDate::from_ymd_opt(2024, 3, 1),
                    ..MovieSummary::default()
                },
            ),
            candidate(
                3,
                MovieSummary {
                    release_date: NaiveDate::from_ymd_opt(2025, 1, 15),
                    ..MovieSummary::default()
                },
            ),
        ];
        rank(&mut candidates, RankKey::ReleaseRecency);
        assert_eq!(ids(&candidates), vec![3, 2, 1]);
    }

    #[test]
    fn vote_count_sorts_descending() {
        let mut candidates = vec![
            candidate(
                1,
                MovieSummary {
                    vote_count: 120,
                    ..MovieSummary::default()
                },
            ),
            candidate(
                2,
                MovieSummary {
                    vote_count: 8000,
                    ..MovieSummary::default()
                },
            ),
        ];
        rank(&mut candidates, RankKey::VoteCount);
        assert_eq!(ids(&candidates), vec![2, 1]);
    }

    #[test]
    fn nan_popularity_does_not_panic() {
        let mut candidates = vec![
            candidate(
                1,
                MovieSummary {
                    popularity: f32::NAN,
                    ..MovieSummary::default()
                },
            ),
            candidate(
                2,
                MovieSummary {
                    popularity: 5.0,
                    ..MovieSummary::default()
                },
            ),
        ];
        rank(&mut candidates, RankKey::Popularity);
        assert_eq!(candidates.len(), 2);
    }
}
