//! Top-level detection pipeline: one search call feeding the scorer.

mod error;

pub use error::DetectorError;

use tracing::debug;

use crate::scoring::{HeadlineScorer, Verdict};
use crate::search::SearchProvider;

/// The headline-checking pipeline.
///
/// Owns the search backend and the scorer. Nothing here mutates after
/// construction; build once and share.
pub struct Detector<S: SearchProvider> {
    search: S,
    scorer: HeadlineScorer,
}

impl<S: SearchProvider> Detector<S> {
    pub fn new(search: S, scorer: HeadlineScorer) -> Self {
        Self { search, scorer }
    }

    /// Checks a headline end to end.
    ///
    /// The search query is the trimmed headline; the verdict echoes the
    /// headline as submitted. A failed search aborts the run before any
    /// model or credibility work, and the error is returned unchanged.
    pub async fn check(&self, headline: &str) -> Result<Verdict, DetectorError> {
        let query = headline.trim();
        debug!(query_len = query.len(), "Checking headline");

        let results = self.search.search(query).await?;

        Ok(self.scorer.assess(headline, &results)?)
    }

    /// Returns the scorer.
    pub fn scorer(&self) -> &HeadlineScorer {
        &self.scorer
    }
}
