//! Orchestration layer wiring the catalog, the feed aggregator and the
//! selection pipeline together.
//!
//! The presentation side talks only to [`FeedOrchestrator`]: it requests a
//! feed, a search or a detail page and gets back ranked, bounded results
//! tagged with a request generation for last-writer-wins display.

pub mod feed;
pub mod orchestrator;

pub use feed::{FeedKind, search_policy, similar_policy};
pub use orchestrator::{FeedOrchestrator, RankedFeed};
