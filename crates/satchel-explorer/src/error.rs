//! Error types for explorer operations.

/// Errors that can occur when querying the block explorer.
///
/// No retry or recovery happens here; every failure is surfaced to the
/// caller, which owns any retry policy.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    /// The request could not complete (DNS, connect, TLS, body read).
    #[error("network unavailable: {0}")]
    NetworkUnavailable(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The explorer answered with a non-2xx status.
    #[error("server error ({status_code}): {message}")]
    ServerError {
        /// HTTP status code.
        status_code: u16,
        /// Response body, as far as it could be read.
        message: String,
    },
}
