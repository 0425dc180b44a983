//! Wire types exchanged with the trust backend.
//!
//! Payloads are decoded with serde and then checked by [`SchemaError`]-returning
//! validators, so nothing out of range reaches the orchestrator's snapshot.

mod explanation;
mod score;
mod vote;

pub use explanation::{gsb_flagged, is_truthy, Explanation, Signal, GSB_FLAGGED_KEY};
pub use score::{Breakdown, Level, SiteScore};
pub use vote::{HealthStatus, Vote, VoteLabel, VoteReceipt};

/// A decoded payload that violates the expected schema.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct SchemaError {
    pub field: &'static str,
    pub reason: String,
}

impl SchemaError {
    pub(crate) fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}
