//! Image URL construction for the catalog's CDN.
//!
//! Paths in the data model are relative identifiers like `/parasite.jpg`;
//! rendering needs them expanded against the image host at a concrete size.

use crate::types::MovieSummary;

const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Render sizes used by the site: `w500` for poster cards, `w1280` for hero
/// backdrops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    W500,
    W1280,
}

impl ImageSize {
    fn as_str(self) -> &'static str {
        match self {
            ImageSize::W500 => "w500",
            ImageSize::W1280 => "w1280",
        }
    }
}

pub fn image_url(path: &str, size: ImageSize) -> String {
    format!("{IMAGE_BASE_URL}/{}{path}", size.as_str())
}

/// Poster card URL for one title
pub fn poster_url(movie: &MovieSummary) -> Option<String> {
    movie
        .poster_path
        .as_deref()
        .map(|path| image_url(path, ImageSize::W500))
}

/// Hero backdrop URL, falling back to the poster when no backdrop exists
pub fn backdrop_url(movie: &MovieSummary) -> Option<String> {
    movie
        .backdrop_path
        .as_deref()
        .or(movie.poster_path.as_deref())
        .map(|path| image_url(path, ImageSize::W1280))
}
