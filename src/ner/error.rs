use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NerError {
    #[error("NER model not found at path: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load NER model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("NER inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("invalid NER configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<candle_core::Error> for NerError {
    fn from(err: candle_core::Error) -> Self {
        NerError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for NerError {
    fn from(err: std::io::Error) -> Self {
        NerError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
