use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Non-200 response from the search API. The `Display` form is the
    /// failure value surfaced to callers, body included verbatim.
    #[error("Error {status}: {body}")]
    Status { status: u16, body: String },

    /// The request itself failed (DNS, connect, timeout).
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 200 response whose body did not match the expected shape.
    #[error("malformed search response: {reason}")]
    MalformedResponse { reason: String },

    #[error("invalid search configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl SearchError {
    /// Returns the HTTP status for a [`SearchError::Status`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
