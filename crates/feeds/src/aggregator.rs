//! Executes feed plans against the catalog.
//!
//! Sub-queries run concurrently as spawned tasks, but their outputs are
//! joined and concatenated in declaration order before anything downstream
//! sees them. Ranking needs the full candidate set, so there is no streaming
//! hand-off.

use std::sync::Arc;
use std::time::Duration;

use catalog::{CatalogClient, Endpoint, MovieSummary, QueryParams};
use tracing::{debug, instrument, warn};

use crate::plan::{FeedPlan, SubQuery};

/// Delay between consecutive id resolutions inside a curated sub-query,
/// keeping enumerating feeds under the upstream rate limit.
const DEFAULT_THROTTLE: Duration = Duration::from_millis(250);

/// Runs the sub-queries of a feed plan and concatenates their results
#[derive(Debug, Clone)]
pub struct Aggregator {
    client: Arc<CatalogClient>,
    throttle: Duration,
}

impl Aggregator {
    pub fn new(client: Arc<CatalogClient>) -> Self {
        Self {
            client,
            throttle: DEFAULT_THROTTLE,
        }
    }

    /// Configure the inter-dispatch delay for enumerating sub-queries
    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    /// Run every sub-query and concatenate the outputs in declaration order.
    ///
    /// Sub-queries that fail contribute an empty segment; the aggregate is
    /// simply smaller. Duplicates are preserved for the next stage.
    #[instrument(skip_all, fields(sub_queries = plan.len()))]
    pub async fn aggregate(&self, plan: &FeedPlan) -> Vec<MovieSummary> {
        let mut handles = Vec::with_capacity(plan.len());
        for sub_query in plan.sub_queries() {
            let client = Arc::clone(&self.client);
            let sub_query = sub_query.clone();
            let throttle = self.throttle;
            handles.push(tokio::spawn(async move {
                run_sub_query(&client, sub_query, throttle).await
            }));
        }

        // Joining in spawn order re-imposes declaration order regardless of
        // completion order.
        let mut candidates = Vec::new();
        for handle in handles {
            match handle.await {
                Ok(batch) => candidates.extend(batch),
                Err(err) => warn!("sub-query task failed: {err}"),
            }
        }
        debug!(
            "aggregated {} candidates from {} sub-queries",
            candidates.len(),
            plan.len()
        );
        candidates
    }
}

async fn run_sub_query(
    client: &CatalogClient,
    sub_query: SubQuery,
    throttle: Duration,
) -> Vec<MovieSummary> {
    match sub_query {
        SubQuery::List {
            endpoint,
            params,
            take,
        } => {
            let mut results = client.query(&endpoint, &params).await;
            if let Some(take) = take {
                results.truncate(take);
            }
            results
        }
        SubQuery::Pinned { entries } => {
            let mut results = Vec::with_capacity(entries.len());
            for (index, entry) in entries.into_iter().enumerate() {
                if index > 0 {
                    tokio::time::sleep(throttle).await;
                }
                match client.detail(entry.id).await {
                    Some(detail) => results.push(detail.into_summary()),
                    None => {
                        // Id lookup failed; fall back to the first search hit.
                        let params = QueryParams::new().query(&entry.fallback_query);
                        let found = client.query(&Endpoint::Search, &params).await;
                        results.extend(found.into_iter().take(1));
                    }
                }
            }
            results
        }
    }
}
