//! Environment-backed configuration.
//!
//! Everything has a default or an explicit stub fallback; override with
//! `CREDCHECK_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::DEFAULT_RESULT_LIMIT;

/// Root configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `CREDCHECK_*` overrides on top of
/// defaults. Credentials and model paths stay optional here; the binary
/// decides whether a missing model path means stub mode, and the search
/// client rejects missing credentials at construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search API key.
    pub api_key: Option<String>,

    /// Programmable Search Engine id (the `cx` parameter).
    pub engine_id: Option<String>,

    /// Directory of the embedding checkpoint.
    pub embed_model_path: Option<PathBuf>,

    /// Directory of the NER checkpoint.
    pub ner_model_path: Option<PathBuf>,

    /// Search results scored per headline. Default: `5`.
    pub result_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            engine_id: None,
            embed_model_path: None,
            ner_model_path: None,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl Config {
    const ENV_API_KEY: &'static str = "CREDCHECK_API_KEY";
    const ENV_ENGINE_ID: &'static str = "CREDCHECK_SEARCH_ENGINE_ID";
    const ENV_EMBED_MODEL_PATH: &'static str = "CREDCHECK_EMBED_MODEL_PATH";
    const ENV_NER_MODEL_PATH: &'static str = "CREDCHECK_NER_MODEL_PATH";
    const ENV_RESULT_LIMIT: &'static str = "CREDCHECK_RESULT_LIMIT";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            api_key: Self::parse_string_from_env(Self::ENV_API_KEY),
            engine_id: Self::parse_string_from_env(Self::ENV_ENGINE_ID),
            embed_model_path: Self::parse_path_from_env(Self::ENV_EMBED_MODEL_PATH),
            ner_model_path: Self::parse_path_from_env(Self::ENV_NER_MODEL_PATH),
            result_limit: Self::parse_result_limit_from_env(defaults.result_limit)?,
        })
    }

    /// Validates model paths (does not touch credentials).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for path in [&self.embed_model_path, &self.ner_model_path]
            .into_iter()
            .flatten()
        {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    fn parse_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_path_from_env(var_name: &str) -> Option<PathBuf> {
        Self::parse_string_from_env(var_name).map(PathBuf::from)
    }

    fn parse_result_limit_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_RESULT_LIMIT) {
            Ok(value) => {
                let limit: usize =
                    value
                        .parse()
                        .map_err(|e| ConfigError::ResultLimitParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if limit == 0 {
                    return Err(ConfigError::InvalidResultLimit { value });
                }

                Ok(limit)
            }
            Err(_) => Ok(default),
        }
    }
}
