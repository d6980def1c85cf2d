//! Origin classification for candidates.

use catalog::MovieSummary;
use std::fmt;

/// Origin bucket for a title. The site only distinguishes its three primary
/// markets; everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Kr,
    Us,
    Jp,
    Other,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Classification::Kr => "KR",
            Classification::Us => "US",
            Classification::Jp => "JP",
            Classification::Other => "OTHER",
        };
        write!(f, "{tag}")
    }
}

/// A candidate tagged with its origin classification
#[derive(Debug, Clone)]
pub struct ClassifiedMovie {
    pub movie: MovieSummary,
    pub classification: Classification,
}

/// Classify by primary origin country; the original language is consulted
/// only when the country list is empty.
pub fn classify(movie: &MovieSummary) -> Classification {
    match movie.origin_country.first().map(String::as_str) {
        Some("KR") => Classification::Kr,
        Some("US") => Classification::Us,
        Some("JP") => Classification::Jp,
        Some(_) => Classification::Other,
        None => match movie.original_language.as_str() {
            "ko" => Classification::Kr,
            "en" => Classification::Us,
            "ja" => Classification::Jp,
            _ => Classification::Other,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(language: &str, countries: &[&str]) -> MovieSummary {
        MovieSummary {
            id: 1,
            original_language: language.to_string(),
            origin_country: countries.iter().map(|c| c.to_string()).collect(),
            ..MovieSummary::default()
        }
    }

    #[test]
    fn primary_country_wins() {
        assert_eq!(classify(&movie("en", &["KR", "US"])), Classification::Kr);
        assert_eq!(classify(&movie("ko", &["US"])), Classification::Us);
        assert_eq!(classify(&movie("ja", &["JP"])), Classification::Jp);
    }

    #[test]
    fn language_only_applies_without_countries() {
        assert_eq!(classify(&movie("ko", &[])), Classification::Kr);
        assert_eq!(classify(&movie("en", &[])), Classification::Us);
        assert_eq!(classify(&movie("fr", &[])), Classification::Other);
    }

    #[test]
    fn unlisted_country_is_other_even_with_listed_language() {
        assert_eq!(classify(&movie("ko", &["FR"])), Classification::Other);
    }
}
