use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::ner::NerError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("entity extraction error: {0}")]
    Entity(#[from] NerError),
}
