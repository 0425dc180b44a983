//! Trust backend client abstraction.
//!
//! The orchestrator and the vote controller only see [`TrustBackend`]; the
//! production implementation is [`HttpBackend`], and tests plug in scripted
//! backends with simulated latency.

mod error;
mod http;

use std::future::Future;

use crate::host::Hostname;
use crate::model::{Explanation, SiteScore, Vote, VoteReceipt};

pub use error::FetchError;
pub use http::HttpBackend;

/// The three backend operations the client core depends on.
///
/// Implementations validate payloads before returning them; a schema
/// violation is a [`FetchError::Schema`].
pub trait TrustBackend: Send + Sync + 'static {
    /// `GET /v1/sites/{host}`.
    fn fetch_score(
        &self,
        host: &Hostname,
    ) -> impl Future<Output = Result<SiteScore, FetchError>> + Send;

    /// `GET /v1/sites/{host}/explain`.
    fn fetch_explanation(
        &self,
        host: &Hostname,
    ) -> impl Future<Output = Result<Explanation, FetchError>> + Send;

    /// `POST /v1/votes`. Must be attempted once; callers never retry it.
    fn submit_vote(&self, vote: &Vote)
        -> impl Future<Output = Result<VoteReceipt, FetchError>> + Send;
}
