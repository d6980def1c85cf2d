//! Data model for catalog responses.
//!
//! All fields are deserialization-tolerant: list endpoints routinely omit
//! fields or send empty strings for dates, and a single odd entry must not
//! sink a whole page of results.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Stable identity key for a movie across all endpoints
pub type MovieId = u64;

/// One catalog entry as returned by search, discovery and trending queries
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    /// ISO 639-1 code of the original language
    #[serde(default)]
    pub original_language: String,
    /// Country codes, first entry is the primary production country
    #[serde(default)]
    pub origin_country: Vec<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub popularity: f32,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub overview: Option<String>,
}

impl MovieSummary {
    /// Release year, with missing dates treated as year 0 so that a recency
    /// floor drops them.
    pub fn release_year(&self) -> i32 {
        self.release_date.map(|date| date.year()).unwrap_or(0)
    }
}

/// Superset of [`MovieSummary`] returned by the detail endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetail {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub origin_country: Vec<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub popularity: f32,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub overview: Option<String>,
    /// Runtime in minutes
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub credits: Option<Credits>,
}

impl MovieDetail {
    /// Collapse the detail back to the list-entry shape, used when a curated
    /// feed resolves titles one id at a time.
    pub fn into_summary(self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title,
            original_title: self.original_title,
            original_language: self.original_language,
            origin_country: self.origin_country,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            release_date: self.release_date,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            popularity: self.popularity,
            adult: self.adult,
            overview: self.overview,
        }
    }

    /// Names of crew members credited as director
    pub fn directors(&self) -> Vec<&str> {
        self.credits
            .iter()
            .flat_map(|credits| credits.crew.iter())
            .filter(|member| member.job == "Director")
            .map(|member| member.name.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    pub name: String,
    #[serde(default)]
    pub job: String,
}

/// Poster inventory from the images endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ImageList {
    #[serde(default)]
    pub posters: Vec<PosterAsset>,
}

impl ImageList {
    /// Whether a poster exists in the given language. Posters with no
    /// language tag are title-neutral artwork and count for any language.
    pub fn has_poster_in(&self, language: &str) -> bool {
        self.posters.iter().any(|poster| {
            poster
                .iso_639_1
                .as_deref()
                .map(|lang| lang == language)
                .unwrap_or(true)
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PosterAsset {
    #[serde(default)]
    pub iso_639_1: Option<String>,
    pub file_path: String,
}

/// The catalog sends `""` instead of omitting unknown release dates; both
/// map to `None`, as does any date we cannot parse.
fn empty_date_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<NaiveDate>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_parses_typical_list_entry() {
        let raw = r#"{
            "id": 496243,
            "title": "기생충",
            "original_title": "기생충",
            "original_language": "ko",
            "origin_country": ["KR"],
            "poster_path": "/parasite.jpg",
            "backdrop_path": "/parasite-bg.jpg",
            "release_date": "2019-05-30",
            "vote_average": 8.5,
            "vote_count": 16000,
            "popularity": 92.3,
            "adult": false,
            "overview": "전원 백수인 기택네 가족."
        }"#;

        let movie: MovieSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(movie.id, 496243);
        assert_eq!(movie.origin_country, vec!["KR".to_string()]);
        assert_eq!(movie.release_year(), 2019);
        assert!(!movie.adult);
    }

    #[test]
    fn summary_tolerates_missing_fields() {
        let movie: MovieSummary = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(movie.id, 7);
        assert!(movie.title.is_empty());
        assert!(movie.poster_path.is_none());
        assert_eq!(movie.release_year(), 0);
    }

    #[test]
    fn empty_release_date_is_absent() {
        let movie: MovieSummary =
            serde_json::from_str(r#"{"id": 1, "release_date": ""}"#).unwrap();
        assert!(movie.release_date.is_none());
    }

    #[test]
    fn detail_surfaces_directors() {
        let raw = r#"{
            "id": 1,
            "title": "Old Movie",
            "runtime": 120,
            "genres": [{"id": 18, "name": "Drama"}],
            "credits": {
                "crew": [
                    {"name": "Bong Joon-ho", "job": "Director"},
                    {"name": "Someone Else", "job": "Producer"}
                ]
            }
        }"#;

        let detail: MovieDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(detail.directors(), vec!["Bong Joon-ho"]);
        assert_eq!(detail.runtime, Some(120));
        assert_eq!(detail.genres[0].name, "Drama");
    }

    #[test]
    fn poster_language_check_counts_neutral_posters() {
        let images = ImageList {
            posters: vec![
                PosterAsset {
                    iso_639_1: Some("en".to_string()),
                    file_path: "/en.jpg".to_string(),
                },
                PosterAsset {
                    iso_639_1: None,
                    file_path: "/neutral.jpg".to_string(),
                },
            ],
        };
        assert!(images.has_poster_in("ko"));

        let english_only = ImageList {
            posters: vec![PosterAsset {
                iso_639_1: Some("en".to_string()),
                file_path: "/en.jpg".to_string(),
            }],
        };
        assert!(!english_only.has_poster_in("ko"));
    }
}
