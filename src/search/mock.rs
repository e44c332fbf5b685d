use std::sync::Mutex;

use super::SearchResult;
use super::client::SearchProvider;
use super::error::SearchError;

enum CannedResponse {
    Results(Vec<SearchResult>),
    Status { status: u16, body: String },
}

/// Canned search backend for tests.
///
/// Returns the same canned response on every call and records the queries it
/// received.
pub struct MockSearchProvider {
    canned: CannedResponse,
    queries: Mutex<Vec<String>>,
}

impl MockSearchProvider {
    /// Mock that always answers with `results`.
    pub fn with_results(results: Vec<SearchResult>) -> Self {
        Self {
            canned: CannedResponse::Results(results),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Mock that always fails with [`SearchError::Status`].
    pub fn with_status_error(status: u16, body: impl Into<String>) -> Self {
        Self {
            canned: CannedResponse::Status {
                status,
                body: body.into(),
            },
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Number of search calls observed.
    pub fn call_count(&self) -> usize {
        self.queries.lock().expect("mock lock poisoned").len()
    }

    /// Queries received, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("mock lock poisoned").clone()
    }
}

impl SearchProvider for MockSearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        self.queries
            .lock()
            .expect("mock lock poisoned")
            .push(query.to_string());

        match &self.canned {
            CannedResponse::Results(results) => Ok(results.clone()),
            CannedResponse::Status { status, body } => Err(SearchError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
