//! Cross-cutting, shared constants.
//!
//! The verdict thresholds and credibility weights are hand-tuned as a set;
//! changing one without re-calibrating the others shifts the decision
//! boundary. Prefer referencing these constants over re-stating literals.

/// A headline whose average similarity falls below this value is a fake-news
/// candidate (subject to the credibility check).
pub const SIMILARITY_THRESHOLD: f32 = 0.75;

/// Average credibility at or below this value counts as "no trust signal".
/// The comparison is inclusive: exactly 0.01 still fails the check.
pub const CREDIBILITY_THRESHOLD: f32 = 0.01;

/// Credibility weight for a link matching the trusted-source allowlist.
pub const TRUSTED_SOURCE_WEIGHT: f32 = 0.5;

/// Credibility weight for a link mentioning a wire service (bbc/reuters).
/// Stacks with [`TRUSTED_SOURCE_WEIGHT`].
pub const WIRE_SERVICE_WEIGHT: f32 = 0.3;

/// Credibility weight for a result title mentioning "factcheck".
pub const FACTCHECK_TITLE_WEIGHT: f32 = 0.2;

/// Default embedding dimension (BERT-base hidden size).
pub const DEFAULT_EMBEDDING_DIM: usize = 768;

/// Default max tokens fed to the encoder and the NER head.
pub const DEFAULT_MAX_SEQ_LEN: usize = 512;

/// Default number of search results scored per headline.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credibility_weights_sum_to_one() {
        let max = TRUSTED_SOURCE_WEIGHT + WIRE_SERVICE_WEIGHT + FACTCHECK_TITLE_WEIGHT;
        assert!((max - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_thresholds_in_range() {
        assert!((0.0..=1.0).contains(&SIMILARITY_THRESHOLD));
        assert!((0.0..=1.0).contains(&CREDIBILITY_THRESHOLD));
    }
}
