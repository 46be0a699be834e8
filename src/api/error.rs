//! API Error Types
//!
//! Distinguishes the three ways a dashboard fetch can go wrong: the request
//! never completed, the server answered with an error status, or the body
//! was not the JSON shape we expected.

use thiserror::Error;

/// Failure surfaced by the API client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Request could not be sent or the connection dropped
    #[error("network error: {0}")]
    Network(String),

    /// Server responded with a non-success status code
    #[error("server responded with status {0}")]
    Status(u16),

    /// Response body was not valid JSON for the expected type
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short human-readable heading for the error placeholder
    pub fn heading(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "Request failed",
            FetchError::Status(_) => "Server error",
            FetchError::Decode(_) => "Unexpected response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_cause() {
        let err = FetchError::Status(503);
        assert_eq!(err.to_string(), "server responded with status 503");
        assert_eq!(err.heading(), "Server error");
    }
}
