//! HTTP client for the catalog service.
//!
//! ## Fail-soft contract
//! The feed pipeline aggregates many sub-queries per user action, and a
//! single failed request must not abort the whole feed. [`CatalogClient::query`]
//! therefore returns an empty list on any failure and only reports the cause
//! through tracing. [`CatalogClient::try_query`] keeps the `Result` for
//! callers that need to distinguish causes (tests, the detail path).

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::types::{ImageList, MovieDetail, MovieId, MovieSummary};

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// Language injected into every request unless overridden per query
pub const DEFAULT_LANGUAGE: &str = "ko-KR";
/// Region injected into every request unless overridden per query
pub const DEFAULT_REGION: &str = "KR";

/// List endpoints exposed by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Discover,
    Search,
    TrendingDay,
    TrendingWeek,
    NowPlaying,
    Popular,
    /// Titles similar to the given movie
    Similar(MovieId),
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Discover => "/discover/movie".to_string(),
            Endpoint::Search => "/search/movie".to_string(),
            Endpoint::TrendingDay => "/trending/movie/day".to_string(),
            Endpoint::TrendingWeek => "/trending/movie/week".to_string(),
            Endpoint::NowPlaying => "/movie/now_playing".to_string(),
            Endpoint::Popular => "/movie/popular".to_string(),
            Endpoint::Similar(id) => format!("/movie/{id}/similar"),
        }
    }
}

/// Sort orders recognized by the discover endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PopularityDesc,
    ReleaseDateDesc,
}

impl SortKey {
    fn as_str(self) -> &'static str {
        match self {
            SortKey::PopularityDesc => "popularity.desc",
            SortKey::ReleaseDateDesc => "primary_release_date.desc",
        }
    }
}

/// Named parameters for one catalog query (builder style)
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
    language: Option<String>,
    region: Option<String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search query
    pub fn query(mut self, query: &str) -> Self {
        self.pairs.push(("query", query.to_string()));
        self
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.pairs.push(("sort_by", key.as_str().to_string()));
        self
    }

    /// Bound primary release dates to `[from, to]` inclusive
    pub fn released_between(mut self, from: chrono::NaiveDate, to: chrono::NaiveDate) -> Self {
        self.pairs
            .push(("primary_release_date.gte", from.to_string()));
        self.pairs.push(("primary_release_date.lte", to.to_string()));
        self
    }

    pub fn released_since(mut self, from: chrono::NaiveDate) -> Self {
        self.pairs
            .push(("primary_release_date.gte", from.to_string()));
        self
    }

    pub fn original_language(mut self, language: &str) -> Self {
        self.pairs
            .push(("with_original_language", language.to_string()));
        self
    }

    pub fn production_country(mut self, country: &str) -> Self {
        self.pairs
            .push(("with_production_countries", country.to_string()));
        self
    }

    pub fn genres(mut self, ids: &[u64]) -> Self {
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.pairs.push(("with_genres", joined));
        self
    }

    pub fn min_vote_count(mut self, count: u32) -> Self {
        self.pairs.push(("vote_count.gte", count.to_string()));
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.pairs.push(("page", page.to_string()));
        self
    }

    /// Override the client's default language for this query
    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    /// Override the client's default region for this query
    pub fn region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub(crate) fn raw(mut self, key: &'static str, value: &str) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }
}

/// Wire shape of every list endpoint
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    results: Vec<MovieSummary>,
}

/// Client for the external movie catalog
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    language: String,
    region: String,
}

impl CatalogClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }

    /// Point the client at a different base URL (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Configure the default locale (default: `ko-KR` / `KR`)
    pub fn with_locale(mut self, language: &str, region: &str) -> Self {
        self.language = language.to_string();
        self.region = region.to_string();
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
        inject_locale: bool,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut query: Vec<(&str, String)> = vec![("api_key", self.api_key.clone())];
        if inject_locale {
            query.push((
                "language",
                params.language.clone().unwrap_or_else(|| self.language.clone()),
            ));
            query.push((
                "region",
                params.region.clone().unwrap_or_else(|| self.region.clone()),
            ));
        }
        query.extend(params.pairs.iter().cloned());

        let response = self.http.get(&url).query(&query).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CatalogError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }
        serde_json::from_str(&body).map_err(|source| CatalogError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }

    /// Fallible list query, exposed for callers that need the error
    pub async fn try_query(
        &self,
        endpoint: &Endpoint,
        params: &QueryParams,
    ) -> Result<Vec<MovieSummary>> {
        let path = endpoint.path();
        let list: ListResponse = self.get_json(&path, params, true).await?;
        Ok(list.results)
    }

    /// List query with the fail-soft contract: any failure becomes an empty
    /// result and is only reported through logging.
    pub async fn query(&self, endpoint: &Endpoint, params: &QueryParams) -> Vec<MovieSummary> {
        match self.try_query(endpoint, params).await {
            Ok(results) => {
                debug!("loaded {} titles from {}", results.len(), endpoint.path());
                results
            }
            Err(err) => {
                warn!("catalog query {} failed: {err}", endpoint.path());
                Vec::new()
            }
        }
    }

    /// Detail lookup, `None` on any failure
    pub async fn detail(&self, id: MovieId) -> Option<MovieDetail> {
        let path = format!("/movie/{id}");
        let params = QueryParams::new().raw("append_to_response", "credits");
        match self.get_json::<MovieDetail>(&path, &params, true).await {
            Ok(detail) => Some(detail),
            Err(err) => {
                warn!("detail lookup for movie {id} failed: {err}");
                None
            }
        }
    }

    /// Poster inventory for one title, `None` on any failure.
    ///
    /// No locale is injected here: a language filter would hide the posters
    /// the localized-poster check needs to see.
    pub async fn images(&self, id: MovieId) -> Option<ImageList> {
        let path = format!("/movie/{id}/images");
        match self
            .get_json::<ImageList>(&path, &QueryParams::new(), false)
            .await
        {
            Ok(images) => Some(images),
            Err(err) => {
                warn!("image lookup for movie {id} failed: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn list_body(ids: &[u64]) -> serde_json::Value {
        json!({
            "results": ids
                .iter()
                .map(|id| json!({"id": id, "title": format!("Movie {id}")}))
                .collect::<Vec<_>>()
        })
    }

    async fn test_client(server: &MockServer) -> CatalogClient {
        CatalogClient::new("test-key").with_base_url(server.uri())
    }

    #[tokio::test]
    async fn query_injects_key_and_default_locale() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .and(query_param("api_key", "test-key"))
            .and(query_param("language", "ko-KR"))
            .and(query_param("region", "KR"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&[1, 2])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let movies = client.query(&Endpoint::Popular, &QueryParams::new()).await;
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].id, 1);
    }

    #[tokio::test]
    async fn query_honors_locale_override() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .and(query_param("region", "JP"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&[9])))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let movies = client
            .query(&Endpoint::Popular, &QueryParams::new().region("JP"))
            .await;
        assert_eq!(movies.len(), 1);
    }

    #[tokio::test]
    async fn non_success_status_yields_empty_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/discover/movie"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let movies = client.query(&Endpoint::Discover, &QueryParams::new()).await;
        assert!(movies.is_empty());

        let err = client
            .try_query(&Endpoint::Discover, &QueryParams::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn malformed_body_yields_empty_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/movie"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let movies = client.query(&Endpoint::Search, &QueryParams::new()).await;
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn detail_lookup_returns_none_on_missing_title() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/42"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        assert!(client.detail(42).await.is_none());
    }

    #[tokio::test]
    async fn image_lookup_skips_locale_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/7/images"))
            .and(query_param("api_key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "posters": [
                    {"iso_639_1": "ko", "file_path": "/ko.jpg"},
                    {"iso_639_1": "en", "file_path": "/en.jpg"}
                ]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let images = client.images(7).await.expect("images should load");
        assert_eq!(images.posters.len(), 2);
        assert!(images.has_poster_in("ko"));

        // The mock would not match if a language param were sent; received
        // requests carry only the api key.
        let requests = server.received_requests().await.unwrap();
        assert!(
            requests
                .iter()
                .all(|req| !req.url.query_pairs().any(|(key, _)| key == "language"))
        );
    }
}
