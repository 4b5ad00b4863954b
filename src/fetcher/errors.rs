//! Error types for resource fetching

use super::retry::Retryable;

/// Why a probe could not produce a page
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The URL template rendered to something unusable
    #[error("Invalid probe URL: {0}")]
    InvalidUrl(String),

    /// The request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection, DNS or protocol failure
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with something other than 200
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// The body could not be read or decoded
    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl FetchError {
    /// Status code carried by the error, if the server answered at all
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl Retryable for FetchError {
    fn is_retryable(&self) -> bool {
        !matches!(self, Self::InvalidUrl(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else if err.is_body() || err.is_decode() {
            Self::Body(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
