//! Coordinates one user action end to end:
//! 1. Build the feed plan
//! 2. Aggregate candidates from the catalog
//! 3. Dedup and classify
//! 4. Filter and rank under the feed's policy
//! 5. Verify localized posters where the policy asks for it
//! 6. Truncate to the policy limit
//!
//! Every run is stamped with a monotonically increasing generation so the
//! presentation side can discard results of runs that were started earlier
//! but finished later.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use anyhow::Result;
use catalog::{CatalogClient, MovieDetail, MovieId, MovieSummary};
use chrono::NaiveDate;
use feeds::{Aggregator, FeedPlan};
use pipeline::{Classification, ClassifiedMovie, SelectionPolicy, dedup_and_classify, filter_and_rank};
use tracing::{debug, info};

use crate::feed::{FeedKind, search_policy, similar_policy};

/// Upper bound on image lookups per feed run; beyond it unverified titles
/// pass through unprobed.
const MAX_POSTER_PROBES: usize = 20;

/// A ranked, bounded feed result stamped with its request generation
#[derive(Debug, Clone)]
pub struct RankedFeed {
    pub generation: u64,
    pub movies: Vec<MovieSummary>,
}

impl RankedFeed {
    fn new(generation: u64, movies: Vec<MovieSummary>) -> Self {
        Self { generation, movies }
    }
}

/// Entry point for the presentation layer
pub struct FeedOrchestrator {
    client: Arc<CatalogClient>,
    aggregator: Aggregator,
    generation: AtomicU64,
}

impl FeedOrchestrator {
    pub fn new(client: Arc<CatalogClient>) -> Self {
        let aggregator = Aggregator::new(Arc::clone(&client));
        Self {
            client,
            aggregator,
            generation: AtomicU64::new(0),
        }
    }

    /// Swap in a differently configured aggregator (tests shorten throttles)
    pub fn with_aggregator(mut self, aggregator: Aggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// Whether a result is from the most recently started run
    pub fn is_current(&self, feed: &RankedFeed) -> bool {
        feed.generation == self.generation.load(Ordering::Acquire)
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Load one of the standing rails
    pub async fn load_feed(&self, kind: FeedKind) -> Result<RankedFeed> {
        let today = chrono::Local::now().date_naive();
        self.load_feed_at(kind, today).await
    }

    /// Same as [`Self::load_feed`] with an explicit date (tests pin it)
    pub async fn load_feed_at(&self, kind: FeedKind, today: NaiveDate) -> Result<RankedFeed> {
        info!("loading {kind} feed");
        self.run(kind.plan(today), kind.policy(), None).await
    }

    /// Run a user-initiated search
    pub async fn search(&self, query: &str) -> Result<RankedFeed> {
        info!("searching for {query:?}");
        self.run(feeds::library::search(query), search_policy(), None)
            .await
    }

    /// Recommendation rail for a detail page. The source title itself is
    /// excluded; an unresolvable id yields an empty feed rather than an
    /// error.
    pub async fn similar(&self, id: MovieId) -> Result<RankedFeed> {
        let Some(detail) = self.client.detail(id).await else {
            return Ok(RankedFeed::new(self.next_generation(), Vec::new()));
        };
        let today = chrono::Local::now().date_naive();
        self.run(
            feeds::library::similar_to(&detail, today),
            similar_policy(),
            Some(id),
        )
        .await
    }

    /// Detail lookup for the item-activation path
    pub async fn detail(&self, id: MovieId) -> Option<MovieDetail> {
        self.client.detail(id).await
    }

    async fn run(
        &self,
        plan: FeedPlan,
        policy: SelectionPolicy,
        exclude: Option<MovieId>,
    ) -> Result<RankedFeed> {
        // Stamp the run before the first await so generations follow
        // initiation order, not completion order.
        let generation = self.next_generation();
        let started = Instant::now();

        let mut candidates = self.aggregator.aggregate(&plan).await;
        if let Some(id) = exclude {
            candidates.retain(|movie| movie.id != id);
        }
        info!("aggregated {} candidates", candidates.len());

        let classified = dedup_and_classify(candidates);
        info!("{} candidates after dedup", classified.len());

        let ranked = filter_and_rank(classified, &policy)?;
        info!("{} candidates after filtering", ranked.len());

        let movies = if policy.local_poster_check {
            self.apply_poster_check(ranked, policy.limit).await
        } else {
            ranked
                .into_iter()
                .take(policy.limit)
                .map(|candidate| candidate.movie)
                .collect()
        };

        info!(
            "feed ready: {} titles in {:.2?}",
            movies.len(),
            started.elapsed()
        );
        Ok(RankedFeed::new(generation, movies))
    }

    /// Walk the ranked list in order, probing unclassified titles for a
    /// Korean or language-neutral poster, until the limit is filled.
    ///
    /// A failed lookup keeps the title, and once [`MAX_POSTER_PROBES`]
    /// lookups have been spent the remaining titles pass through
    /// unverified.
    async fn apply_poster_check(
        &self,
        ranked: Vec<ClassifiedMovie>,
        limit: usize,
    ) -> Vec<MovieSummary> {
        let mut picked = Vec::with_capacity(limit);
        let mut probes = 0;
        for candidate in ranked {
            if picked.len() == limit {
                break;
            }
            let keep = if candidate.classification == Classification::Other
                && probes < MAX_POSTER_PROBES
            {
                probes += 1;
                match self.client.images(candidate.movie.id).await {
                    Some(images) => images.has_poster_in("ko"),
                    None => true,
                }
            } else {
                true
            };
            if keep {
                picked.push(candidate.movie);
            } else {
                debug!("dropped {} for missing local poster", candidate.movie.id);
            }
        }
        picked
    }
}
