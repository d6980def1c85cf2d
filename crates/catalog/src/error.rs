//! Error type for catalog requests.
//!
//! The catalog only signals failure through transport errors, non-2xx
//! statuses and undecodable bodies; there are no structured error codes to
//! consume. Callers on the feed path never see these values (the client
//! converts them to empty results), but the fallible request path keeps them
//! distinct so logs and tests can tell the cases apart.

use thiserror::Error;

/// Errors that can occur while querying the catalog service
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Network-level failure (DNS, connect, timeout, body read)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("unexpected status {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    /// The response body was not the JSON shape we expect
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
