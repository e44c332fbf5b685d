use tracing::{debug, info};

use crate::embedding::Embedder;
use crate::ner::EntityExtractor;
use crate::search::SearchResult;

use super::error::ScoringError;
use super::trust::credibility_score;
use super::types::Verdict;

/// Scores a headline against already-fetched search results.
///
/// Holds the loaded models; everything here is read-only after construction,
/// so a scorer can be shared freely across threads or tasks.
pub struct HeadlineScorer {
    embedder: Embedder,
    extractor: EntityExtractor,
}

impl std::fmt::Debug for HeadlineScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlineScorer")
            .field("embedder", &self.embedder)
            .field("extractor", &self.extractor)
            .finish()
    }
}

impl HeadlineScorer {
    pub fn new(embedder: Embedder, extractor: EntityExtractor) -> Self {
        Self {
            embedder,
            extractor,
        }
    }

    /// Scorer backed entirely by stub models.
    pub fn stub() -> Result<Self, ScoringError> {
        Ok(Self {
            embedder: Embedder::stub()?,
            extractor: EntityExtractor::stub()?,
        })
    }

    /// Cosine similarity between the headline and each result, in result
    /// order. A result is represented by its title and snippet joined with a
    /// single space.
    pub fn similarity_scores(
        &self,
        headline: &str,
        results: &[SearchResult],
    ) -> Result<Vec<f32>, ScoringError> {
        let headline_embedding = self.embedder.embed(headline)?;

        results
            .iter()
            .map(|result| {
                let result_embedding = self.embedder.embed(&result_text(result))?;
                Ok(cosine_similarity(&headline_embedding, &result_embedding))
            })
            .collect()
    }

    /// Fraction of results sharing at least one entity mention with the
    /// headline. Matching is exact and case-sensitive on surface strings.
    pub fn context_score(
        &self,
        headline: &str,
        results: &[SearchResult],
    ) -> Result<f32, ScoringError> {
        if results.is_empty() {
            return Ok(0.0);
        }

        let headline_entities = self.extractor.extract(headline)?;

        let mut matching = 0usize;
        for result in results {
            let entities = self.extractor.extract(&result_text(result))?;
            if entities
                .iter()
                .any(|entity| headline_entities.contains(entity))
            {
                matching += 1;
            }
        }

        Ok(matching as f32 / results.len() as f32)
    }

    /// Runs the full scoring pass and applies the verdict rule.
    pub fn assess(
        &self,
        headline: &str,
        results: &[SearchResult],
    ) -> Result<Verdict, ScoringError> {
        debug!(num_results = results.len(), "Scoring headline");

        let similarities = self.similarity_scores(headline, results)?;
        let credibilities: Vec<f32> = results
            .iter()
            .map(|result| credibility_score(&result.link, &result.title))
            .collect();
        let context = self.context_score(headline, results)?;

        let verdict = Verdict::from_scores(headline, &similarities, &credibilities, context);

        info!(
            average_similarity = verdict.average_similarity,
            average_credibility = verdict.average_credibility,
            context_score = verdict.context_score,
            is_fake = verdict.is_fake,
            "Verdict ready"
        );

        Ok(verdict)
    }

    /// Returns the embedder.
    pub fn embedder(&self) -> &Embedder {
        &self.embedder
    }

    /// Returns the entity extractor.
    pub fn extractor(&self) -> &EntityExtractor {
        &self.extractor
    }
}

fn result_text(result: &SearchResult) -> String {
    format!("{} {}", result.title, result.snippet)
}

/// Normalized dot product between two equal-length vectors, in `[-1, 1]`.
///
/// Mismatched lengths and zero vectors score 0.0 rather than erroring.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
