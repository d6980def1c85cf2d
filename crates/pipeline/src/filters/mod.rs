//! Filter implementations for the candidate pipeline.

pub mod adult;
pub mod origin;
pub mod poster;
pub mod release_year;

// Re-export for convenience
pub use adult::ExcludeAdultFilter;
pub use origin::OriginFilter;
pub use poster::RequirePosterFilter;
pub use release_year::ReleaseYearFilter;
