//! Web search API integration.
//!
//! [`GoogleSearchClient`] wraps the Google Programmable Search JSON API.
//! [`SearchProvider`] is the seam the [`crate::detector`] pipeline is generic
//! over; [`MockSearchProvider`] implements it with canned responses for
//! tests.

pub mod client;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use client::{GoogleSearchClient, SearchProvider};
pub use config::{DEFAULT_SEARCH_ENDPOINT, SearchConfig};
pub use error::SearchError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSearchProvider;

use serde::{Deserialize, Serialize};

/// A single search hit, in the API's relevance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

impl SearchResult {
    /// Creates a result record (mostly useful in tests and fixtures).
    pub fn new(
        title: impl Into<String>,
        snippet: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            link: link.into(),
        }
    }
}
