//! Feed plans: ordered sequences of catalog sub-queries.

use catalog::{Endpoint, MovieId, QueryParams};

/// One sub-query inside a feed plan
#[derive(Debug, Clone)]
pub enum SubQuery {
    /// A single list-endpoint call, optionally truncated to `take` items
    List {
        endpoint: Endpoint,
        params: QueryParams,
        take: Option<usize>,
    },
    /// A curated id list resolved one title at a time, with a text-search
    /// fallback per entry. New pins are data, not code.
    Pinned { entries: Vec<PinnedEntry> },
}

/// One curated title: a known id plus the search query to fall back to when
/// the id lookup fails
#[derive(Debug, Clone)]
pub struct PinnedEntry {
    pub id: MovieId,
    pub fallback_query: String,
}

impl PinnedEntry {
    pub fn new(id: MovieId, fallback_query: impl Into<String>) -> Self {
        Self {
            id,
            fallback_query: fallback_query.into(),
        }
    }
}

/// An ordered sequence of sub-queries describing one logical feed
#[derive(Debug, Clone, Default)]
pub struct FeedPlan {
    sub_queries: Vec<SubQuery>,
}

impl FeedPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a list sub-query (builder pattern)
    pub fn list(mut self, endpoint: Endpoint, params: QueryParams) -> Self {
        self.sub_queries.push(SubQuery::List {
            endpoint,
            params,
            take: None,
        });
        self
    }

    /// Append a list sub-query keeping at most `take` of its results
    pub fn list_take(mut self, endpoint: Endpoint, params: QueryParams, take: usize) -> Self {
        self.sub_queries.push(SubQuery::List {
            endpoint,
            params,
            take: Some(take),
        });
        self
    }

    /// Append a curated sub-query
    pub fn pinned(mut self, entries: Vec<PinnedEntry>) -> Self {
        self.sub_queries.push(SubQuery::Pinned { entries });
        self
    }

    pub fn sub_queries(&self) -> &[SubQuery] {
        &self.sub_queries
    }

    pub fn len(&self) -> usize {
        self.sub_queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sub_queries.is_empty()
    }
}
