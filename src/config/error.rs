//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Result limit is zero.
    #[error("invalid result limit '{value}': must be positive")]
    InvalidResultLimit { value: String },

    /// Result limit string could not be parsed as a number.
    #[error("failed to parse result limit '{value}': {source}")]
    ResultLimitParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a directory (model paths must be directories).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
