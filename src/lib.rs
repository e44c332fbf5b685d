//! Heuristic headline credibility checking.
//!
//! Given a headline, credcheck queries a web search API, compares the
//! headline against the top results using semantic similarity (BERT
//! embeddings, mean-pooled) and named-entity overlap, folds in a hand-tuned
//! source-trust score, and thresholds the aggregate into a boolean verdict.
//!
//! # Pipeline
//!
//! ```text
//! headline -> search -> [embed x(1+N), NER x(1+N), trust xN] -> verdict
//! ```
//!
//! - [`search`] wraps the search API behind the [`SearchProvider`] seam
//! - [`embedding`] and [`ner`] wrap the pretrained models (with
//!   deterministic stub backends for tests)
//! - [`scoring`] combines the per-result signals and applies the verdict
//!   rule
//! - [`detector`] ties it together as [`Detector::check`]
//!
//! Every run is stateless; the loaded models and the trusted-source
//! allowlist are read-only after initialization and safe to share.
//!
//! # Example
//!
//! ```no_run
//! use credcheck::{Detector, GoogleSearchClient, HeadlineScorer, SearchConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let search = GoogleSearchClient::new(SearchConfig::new("api-key", "engine-id"))?;
//! let detector = Detector::new(search, HeadlineScorer::stub()?);
//!
//! let verdict = detector.check("NASA confirms water on Mars").await?;
//! println!("{verdict}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod detector;
pub mod embedding;
pub mod ner;
pub mod scoring;
pub mod search;

pub use config::{Config, ConfigError};
pub use detector::{Detector, DetectorError};
pub use embedding::{Embedder, EmbedderConfig, EmbeddingError};
pub use ner::{EntityExtractor, NerConfig, NerError};
pub use scoring::{
    HeadlineScorer, ScoringError, TRUSTED_SOURCES, Verdict, cosine_similarity, credibility_score,
    is_trusted_source,
};
#[cfg(any(test, feature = "mock"))]
pub use search::MockSearchProvider;
pub use search::{GoogleSearchClient, SearchConfig, SearchError, SearchProvider, SearchResult};
