//! Pipeline for deduplicating, classifying, filtering and ranking movie
//! candidates.
//!
//! ## Architecture
//! Candidates flow through the stages in one direction:
//! 1. Dedup drops later occurrences of an id (first wins)
//! 2. Classification tags each title with its origin
//! 3. Policy filters remove unwanted candidates (adult, no poster, wrong
//!    origin, too old)
//! 4. Ranking orders the survivors and the limit caps the output
//!
//! Everything here is pure and synchronous: for a fixed candidate sequence
//! and policy the output list and its order are fully determined.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{SelectionPolicy, dedup_and_classify, select};
//!
//! let classified = dedup_and_classify(candidates);
//! let ranked = select(classified, &SelectionPolicy::default())?;
//! ```

pub mod classify;
pub mod dedup;
pub mod filter_pipeline;
pub mod filters;
pub mod policy;
pub mod rank;
pub mod select;
pub mod traits;

// Re-export main types
pub use classify::{Classification, ClassifiedMovie, classify};
pub use dedup::{dedup, dedup_and_classify};
pub use filter_pipeline::FilterPipeline;
pub use policy::{RankKey, SelectionPolicy};
pub use select::{filter_and_rank, select};
pub use traits::Filter;
