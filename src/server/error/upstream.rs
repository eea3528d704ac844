use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the upstream film catalog.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Transport failure (connect, timeout, body decode) after all retries.
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success status after all retries, or a non-retryable 4xx.
    #[error("Request to {url} returned {status}")]
    Status { url: String, status: StatusCode },

    /// Configured base URL cannot be joined with a path.
    #[error("Invalid upstream URL '{0}': {1}")]
    InvalidUrl(String, #[source] url::ParseError),
}
