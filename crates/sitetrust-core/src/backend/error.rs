//! Transport-level error for a single backend request.

use std::time::Duration;

use crate::model::SchemaError;

/// Why one request to the trust backend failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// libcurl reported an error (connect, DNS, read, timeout...).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// The response had a non-2xx status.
    #[error("HTTP {0}")]
    Status(u32),
    /// The body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The body decoded but carried out-of-range values.
    #[error("schema violation: {0}")]
    Schema(#[from] SchemaError),
    /// The request did not settle within the configured budget.
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    /// The blocking transfer task panicked or was cancelled.
    #[error("transfer task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    /// A request URL could not be built from the configured base.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}
