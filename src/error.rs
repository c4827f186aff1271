//! Error type shared by the authenticator and the eligibility fetcher.

use reqwest::StatusCode;

pub type ApiResult<T> = Result<T, ApiError>;

/// Every way a single API round trip can fail.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The remote endpoint answered with a non-success status.
    #[error("HTTP {status} for url: {url}")]
    Http { status: StatusCode, url: String },

    /// The response parsed but lacks a usable value for `field`.
    #[error("response is missing field '{field}'")]
    MissingField { field: &'static str },

    /// The response body is not the JSON shape we expect.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request never produced a status (connect, TLS, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Rejected locally before any request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("base url '{0}' cannot carry a path")]
    Url(String),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
