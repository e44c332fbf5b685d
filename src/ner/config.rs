use std::path::PathBuf;

use crate::constants::DEFAULT_MAX_SEQ_LEN;

use super::error::NerError;

#[derive(Debug, Clone)]
/// Configuration for [`EntityExtractor`](super::EntityExtractor).
pub struct NerConfig {
    /// Directory holding `config.json`, `model.safetensors`, `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Max tokens fed to the classifier.
    pub max_seq_len: usize,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for NerConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            testing_stub: false,
        }
    }
}

impl NerConfig {
    /// Env var used to locate the model directory.
    pub const ENV_MODEL_PATH: &'static str = "CREDCHECK_NER_MODEL_PATH";

    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Loads config from environment variables (missing path stays empty).
    pub fn from_env() -> Self {
        let model_dir = std::env::var(Self::ENV_MODEL_PATH)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_default();

        Self {
            model_dir,
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; capitalized-token heuristic).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), NerError> {
        if self.testing_stub {
            return Ok(());
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(NerError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.model_dir.is_dir() {
            return Err(NerError::ModelNotFound {
                path: self.model_dir.clone(),
            });
        }

        Ok(())
    }
}
