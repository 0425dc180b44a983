//! User-facing error taxonomy for lookups and votes.

use crate::backend::FetchError;

/// Failures surfaced by the orchestrator and the vote controller.
///
/// A stale result is not an error; it shows up as
/// [`LookupOutcome::Superseded`](crate::orchestrator::LookupOutcome::Superseded)
/// or [`RefreshOutcome::Discarded`](crate::orchestrator::RefreshOutcome::Discarded).
#[derive(Debug, thiserror::Error)]
pub enum TrustError {
    /// Normalization produced no hostname; nothing was sent.
    #[error("no hostname in input")]
    InputEmpty,
    /// The score request failed; the lookup is in the error state.
    #[error("score request failed: {0}")]
    PrimaryFetchFailed(#[source] FetchError),
    /// The explanation request failed; the lookup degrades to "no explanation".
    #[error("explanation request failed: {0}")]
    SecondaryFetchFailed(#[source] FetchError),
    /// The backend declined the vote, or it never arrived.
    #[error("vote rejected: {0}")]
    VoteRejected(#[source] FetchError),
    /// A score refresh failed; the previously displayed score is kept.
    #[error("score refresh failed: {0}")]
    RefreshFailed(#[source] FetchError),
    /// A refresh was requested before any host was looked up.
    #[error("no active host")]
    NoActiveHost,
}

impl TrustError {
    /// Whether the user should see this error. Secondary failures are only logged.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, TrustError::SecondaryFetchFailed(_))
    }
}
