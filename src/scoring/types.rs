use serde::{Deserialize, Serialize};

use crate::constants::{CREDIBILITY_THRESHOLD, SIMILARITY_THRESHOLD};

/// Final assessment for a headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// The headline as submitted.
    pub headline: String,
    /// Mean cosine similarity between headline and results, in `[-1, 1]`.
    pub average_similarity: f32,
    /// Mean per-result credibility score, `>= 0`.
    pub average_credibility: f32,
    /// Fraction of results sharing a named entity with the headline.
    pub context_score: f32,
    /// The thresholded verdict.
    pub is_fake: bool,
}

impl Verdict {
    /// Aggregates per-result scores and applies the verdict rule.
    ///
    /// Empty slices average to 0.0, so a headline with no search coverage
    /// ends up flagged (`0 < 0.75` and `0 <= 0.01`). Flagging requires BOTH
    /// low similarity and a missing trust signal; either one alone is not
    /// enough.
    pub fn from_scores(
        headline: impl Into<String>,
        similarities: &[f32],
        credibilities: &[f32],
        context_score: f32,
    ) -> Self {
        let average_similarity = mean(similarities);
        let average_credibility = mean(credibilities);
        let is_fake = average_similarity < SIMILARITY_THRESHOLD
            && average_credibility <= CREDIBILITY_THRESHOLD;

        Self {
            headline: headline.into(),
            average_similarity,
            average_credibility,
            context_score,
            is_fake,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (similarity: {:.4}, credibility: {:.4}, context: {:.4})",
            if self.is_fake { "LIKELY FAKE" } else { "PLAUSIBLE" },
            self.average_similarity,
            self.average_credibility,
            self.context_score,
        )
    }
}

fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f32>() / values.len() as f32
    }
}
