//! Error types for the reqres client

use thiserror::Error;

/// Errors raised by the client itself.
///
/// A non-2xx status is not an error: it comes back in the response for the
/// caller to assert on.
#[derive(Error, Debug)]
pub enum ReqresError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Base URL is not an absolute http(s) URL
    #[error("Invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The underlying HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not JSON
    #[error("Response with status {status} is not valid JSON: {source}")]
    InvalidJson {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Response body is JSON but not the expected shape
    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),
}
