//! # Feeds Crate
//!
//! Candidate aggregation: each logical feed (trending, korean, regional,
//! search, similar-to, curated) is described by a [`FeedPlan`], an ordered
//! list of catalog sub-queries. The [`Aggregator`] executes a plan and
//! concatenates the sub-query outputs in declaration order.
//!
//! Declaration order matters downstream: deduplication keeps the first
//! occurrence of an id, so earlier sub-queries win ties. No deduplication or
//! filtering happens here.
//!
//! ## Example Usage
//!
//! ```ignore
//! use feeds::{Aggregator, library};
//!
//! let aggregator = Aggregator::new(client);
//! let plan = library::korean(today);
//! let candidates = aggregator.aggregate(&plan).await;
//! ```

pub mod aggregator;
pub mod library;
pub mod plan;

// Re-export commonly used types
pub use aggregator::Aggregator;
pub use plan::{FeedPlan, PinnedEntry, SubQuery};
