//! Error types for atlassian-client

use thiserror::Error;

use crate::client::Vendor;

/// Result type alias for atlassian-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to a vendor API
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The vendor answered with a non-2xx status.
    ///
    /// The message round-trips the status code, the canonical status text
    /// and the raw response body, e.g.
    /// `Jira API Error: 404 Not Found - Not Found`.
    #[error("{vendor} API Error: {status} {status_text} - {body}")]
    Api {
        /// Vendor that produced the response
        vendor: Vendor,
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status (empty if unknown)
        status_text: String,
        /// Response body text
        body: String,
    },

    /// HTTP client error (connection refused, TLS, invalid URL, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response whose body is not valid JSON
    #[error("Invalid response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The configured base URL cannot be used as a request root
    #[error("Invalid base URL {url}: {reason}")]
    BaseUrl {
        /// Base URL as configured
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// A path segment that would not address a single resource
    #[error("Invalid path segment: {0:?}")]
    PathSegment(String),
}
