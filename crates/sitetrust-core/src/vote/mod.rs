//! Community vote submission.
//!
//! A controller allows one vote in flight at a time. An accepted vote is
//! followed by a score-only refresh through the orchestrator; a rejected vote
//! leaves every piece of displayed trust data exactly as it was.

mod guard;

use std::time::Duration;

use tokio::sync::watch;

use crate::backend::{FetchError, TrustBackend};
use crate::error::TrustError;
use crate::model::{Vote, VoteLabel, VoteReceipt};
use crate::orchestrator::{RefreshOutcome, TrustDataOrchestrator};
use guard::SubmittingGuard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VotePhase {
    #[default]
    Ready,
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoteStatus {
    pub phase: VotePhase,
    /// Error from the last submit, cleared when the next one starts.
    pub last_error: Option<String>,
}

/// What a call to [`VoteSubmissionController::submit`] did.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The backend took the vote; `refresh` is the follow-up score refresh.
    Accepted {
        receipt: VoteReceipt,
        refresh: Result<RefreshOutcome, TrustError>,
    },
    /// The backend declined the vote or could not be reached.
    Rejected(TrustError),
    /// Another vote was still in flight; nothing was sent.
    Busy,
}

pub struct VoteSubmissionController<B> {
    orchestrator: TrustDataOrchestrator<B>,
    status: watch::Sender<VoteStatus>,
    vote_timeout: Duration,
}

impl<B: TrustBackend> VoteSubmissionController<B> {
    pub fn new(orchestrator: TrustDataOrchestrator<B>, vote_timeout: Duration) -> Self {
        let (status, _) = watch::channel(VoteStatus::default());
        Self {
            orchestrator,
            status,
            vote_timeout,
        }
    }

    pub fn status(&self) -> VoteStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<VoteStatus> {
        self.status.subscribe()
    }

    /// Builds a vote for the orchestrator's active host and submits it.
    pub async fn submit_for_active(
        &self,
        label: VoteLabel,
        reason: impl Into<String>,
    ) -> Result<SubmitOutcome, TrustError> {
        let host = self
            .orchestrator
            .active_host()
            .ok_or(TrustError::NoActiveHost)?;
        Ok(self.submit(Vote::new(host, label, reason)).await)
    }

    /// Sends `vote` once, then refreshes the score if it was accepted.
    ///
    /// Returns [`SubmitOutcome::Busy`] without sending anything while another
    /// submission is in flight.
    pub async fn submit(&self, vote: Vote) -> SubmitOutcome {
        let started = self.status.send_if_modified(|s| {
            if s.phase == VotePhase::Submitting {
                return false;
            }
            s.phase = VotePhase::Submitting;
            s.last_error = None;
            true
        });
        if !started {
            tracing::debug!(host = %vote.host, "vote already in flight, ignoring submit");
            return SubmitOutcome::Busy;
        }
        let mut guard = SubmittingGuard {
            status: &self.status,
            error: None,
        };

        let sent = tokio::time::timeout(
            self.vote_timeout,
            self.orchestrator.backend().submit_vote(&vote),
        )
        .await
        .unwrap_or_else(|_| Err(FetchError::Timeout(self.vote_timeout)));

        match sent {
            Ok(receipt) => {
                tracing::info!(
                    host = %vote.host,
                    label = %vote.label,
                    new_score = ?receipt.new_score,
                    "vote accepted"
                );
                let refresh = self.orchestrator.refresh_host(&vote.host).await;
                SubmitOutcome::Accepted { receipt, refresh }
            }
            Err(e) => {
                let err = TrustError::VoteRejected(e);
                tracing::warn!(host = %vote.host, error = %err, "vote not recorded");
                guard.error = Some(err.to_string());
                SubmitOutcome::Rejected(err)
            }
        }
    }
}
