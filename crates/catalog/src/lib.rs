//! # Catalog Crate
//!
//! Client for the external movie catalog (TMDB) plus the data model shared
//! by the rest of the workspace.
//!
//! ## Components
//!
//! ### CatalogClient
//! Thin HTTP client over the catalog's list and detail endpoints. Every
//! request injects the configured API key, language and region unless the
//! caller overrides them. The public query surface is fail-soft: transport
//! failures, non-2xx statuses and undecodable payloads all collapse to an
//! empty result after a `warn!`, so one broken sub-query can never abort a
//! whole feed.
//!
//! ### Data model
//! [`MovieSummary`] is one list-endpoint entry, [`MovieDetail`] the superset
//! returned by the detail endpoint (runtime, genres, crew credits),
//! [`ImageList`] the per-title poster inventory used by the localized-poster
//! check.
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CatalogClient, Endpoint, QueryParams, SortKey};
//!
//! let client = CatalogClient::new(api_key);
//! let movies = client
//!     .query(
//!         &Endpoint::Discover,
//!         &QueryParams::new()
//!             .original_language("ko")
//!             .sort_by(SortKey::PopularityDesc),
//!     )
//!     .await;
//! ```

pub mod client;
pub mod error;
pub mod images;
pub mod types;

// Re-export commonly used types
pub use client::{CatalogClient, Endpoint, QueryParams, SortKey};
pub use error::{CatalogError, Result};
pub use images::{ImageSize, backdrop_url, image_url, poster_url};
pub use types::{
    CrewMember, Genre, ImageList, MovieDetail, MovieId, MovieSummary, PosterAsset,
};
