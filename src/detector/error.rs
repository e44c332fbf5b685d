use thiserror::Error;

use crate::scoring::ScoringError;
use crate::search::SearchError;

/// Top-level pipeline failure.
///
/// `transparent` keeps the inner `Display` intact, so a search failure
/// surfaces to callers exactly as the search client produced it
/// (`Error 403: <body>`).
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
