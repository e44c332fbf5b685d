//! Headline scoring: similarity, credibility, context, verdict.
//!
//! [`HeadlineScorer`] combines three per-result signals over a search result
//! list:
//!
//! - semantic similarity between headline and result (via [`crate::embedding`])
//! - source-trust credibility from [`trust`]
//! - named-entity overlap (via [`crate::ner`])
//!
//! and [`Verdict::from_scores`] folds them into the boolean verdict. The
//! scorer never performs network work; fetching results is the
//! [`crate::detector`]'s job.

pub mod error;
pub mod scorer;
pub mod trust;
pub mod types;


pub use error::ScoringError;
pub use scorer::{HeadlineScorer, cosine_similarity};
pub use trust::{TRUSTED_SOURCES, credibility_score, is_trusted_source};
pub use types::Verdict;
