//! Client error types.

use thiserror::Error;

pub type AriaResult<T> = Result<T, AriaError>;

#[derive(Debug, Error)]
pub enum AriaError {
    #[error("request failed with {status}: {body}")]
    RequestFailed {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl AriaError {
    /// Failures worth another poll attempt. Transport errors and non-2xx
    /// responses are treated alike; a body that fails to decode is not
    /// retried.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AriaError::Network(_) | AriaError::RequestFailed { .. }
        )
    }
}
