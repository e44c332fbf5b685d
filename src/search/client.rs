use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use super::SearchResult;
use super::config::SearchConfig;
use super::error::SearchError;

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponse {
    #[serde(default)]
    pub(super) items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchItem {
    #[serde(default)]
    pub(super) title: String,
    #[serde(default)]
    pub(super) snippet: String,
    #[serde(default)]
    pub(super) link: String,
}

/// Abstraction over the web search backend.
///
/// The real implementation is [`GoogleSearchClient`]; tests substitute
/// [`MockSearchProvider`](super::MockSearchProvider).
pub trait SearchProvider: Send + Sync {
    /// Runs `query` and returns hits in the API's relevance order.
    fn search(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, SearchError>> + Send;
}

impl<T: SearchProvider> SearchProvider for &T {
    fn search(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, SearchError>> + Send {
        (**self).search(query)
    }
}

/// Google Programmable Search client.
///
/// One blocking request per query; a non-200 status is surfaced as
/// [`SearchError::Status`] with the response body attached. No retry, no
/// backoff: resilience belongs to callers, not here.
pub struct GoogleSearchClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl std::fmt::Debug for GoogleSearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleSearchClient")
            .field("endpoint", &self.config.endpoint)
            .field("result_limit", &self.config.result_limit)
            .finish()
    }
}

impl GoogleSearchClient {
    /// Builds a client, validating the config first.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { http, config })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl SearchProvider for GoogleSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        debug!(
            query_len = query.len(),
            limit = self.config.result_limit,
            "Dispatching search request"
        );

        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[
                ("q", query),
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.engine_id.as_str()),
            ])
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status { status, body });
        }

        let parsed: SearchResponse =
            response
                .json()
                .await
                .map_err(|e| SearchError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        let results: Vec<SearchResult> = parsed
            .items
            .into_iter()
            .take(self.config.result_limit)
            .map(|item| SearchResult {
                title: item.title,
                snippet: item.snippet,
                link: item.link,
            })
            .collect();

        info!(count = results.len(), "Search complete");

        Ok(results)
    }
}
