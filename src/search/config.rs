use crate::constants::DEFAULT_RESULT_LIMIT;

use super::error::SearchError;

/// Endpoint used when `CREDCHECK_SEARCH_ENDPOINT` is not set.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Default request timeout for the search call.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone)]
/// Configuration for [`GoogleSearchClient`](super::GoogleSearchClient).
pub struct SearchConfig {
    /// API key for the search API.
    pub api_key: String,
    /// Programmable Search Engine id (the `cx` parameter).
    pub engine_id: String,
    /// Search endpoint URL (overridable for tests).
    pub endpoint: String,
    /// Max results returned per query.
    pub result_limit: usize,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            engine_id: String::new(),
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            result_limit: DEFAULT_RESULT_LIMIT,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl SearchConfig {
    /// Env var holding the API key.
    pub const ENV_API_KEY: &'static str = "CREDCHECK_API_KEY";
    /// Env var holding the search engine id.
    pub const ENV_ENGINE_ID: &'static str = "CREDCHECK_SEARCH_ENGINE_ID";
    /// Env var overriding the endpoint URL.
    pub const ENV_ENDPOINT: &'static str = "CREDCHECK_SEARCH_ENDPOINT";
    /// Env var overriding the result limit.
    pub const ENV_RESULT_LIMIT: &'static str = "CREDCHECK_RESULT_LIMIT";

    /// Creates a config with credentials and default everything else.
    pub fn new(api_key: impl Into<String>, engine_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            engine_id: engine_id.into(),
            ..Default::default()
        }
    }

    /// Loads config from environment variables (falling back to defaults).
    pub fn from_env() -> Self {
        let read = |name: &str| {
            std::env::var(name)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let result_limit = read(Self::ENV_RESULT_LIMIT)
            .and_then(|v| v.parse().ok())
            .filter(|&limit| limit > 0)
            .unwrap_or(DEFAULT_RESULT_LIMIT);

        Self {
            api_key: read(Self::ENV_API_KEY).unwrap_or_default(),
            engine_id: read(Self::ENV_ENGINE_ID).unwrap_or_default(),
            endpoint: read(Self::ENV_ENDPOINT)
                .unwrap_or_else(|| DEFAULT_SEARCH_ENDPOINT.to_string()),
            result_limit,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Overrides the result limit.
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        assert!(limit > 0, "result limit must be positive");
        self.result_limit = limit;
        self
    }

    /// Overrides the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Validates required fields before a client is built.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.api_key.is_empty() {
            return Err(SearchError::InvalidConfig {
                reason: "api_key is required".to_string(),
            });
        }
        if self.engine_id.is_empty() {
            return Err(SearchError::InvalidConfig {
                reason: "engine_id is required".to_string(),
            });
        }
        if self.result_limit == 0 {
            return Err(SearchError::InvalidConfig {
                reason: "result_limit must be positive".to_string(),
            });
        }
        Ok(())
    }
}
