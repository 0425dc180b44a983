//! Read-only view of the orchestrator state.

use crate::host::Hostname;
use crate::model::{Explanation, SiteScore};

/// Lifecycle of the current lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPhase {
    /// No host looked up yet.
    #[default]
    Idle,
    /// Waiting for the score. See [`TrustSnapshot::is_loading`] for the
    /// explanation.
    Loading,
    /// A score is displayed. The explanation may be absent.
    Success,
    /// The score request failed; nothing but the error is shown.
    Error,
}

/// Snapshot published on every state transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrustSnapshot {
    /// Host owning the current generation.
    pub host: Option<Hostname>,
    /// Request generation; bumped on every lookup.
    pub generation: u64,
    pub phase: LookupPhase,
    pub score: Option<SiteScore>,
    pub explanation: Option<Explanation>,
    /// Derived from `explanation` each time it changes.
    pub gsb_flagged: bool,
    /// Whether the explanation request of this generation is still in flight.
    pub explanation_pending: bool,
    /// Primary failure text when `phase` is `Error`.
    pub error: Option<String>,
    /// Last failed refresh; the displayed score is left as it was.
    pub refresh_error: Option<String>,
}

impl TrustSnapshot {
    pub(super) fn started(host: Hostname, generation: u64) -> Self {
        Self {
            host: Some(host),
            generation,
            phase: LookupPhase::Loading,
            explanation_pending: true,
            ..Self::default()
        }
    }

    /// True until both fetches of this generation have settled, unless the
    /// score already failed. `gsb_flagged` is final only once this is false.
    pub fn is_loading(&self) -> bool {
        match self.phase {
            LookupPhase::Loading => true,
            LookupPhase::Success => self.explanation_pending,
            LookupPhase::Idle | LookupPhase::Error => false,
        }
    }

    /// Score shown, explanation settled without a value.
    pub fn is_partial(&self) -> bool {
        self.phase == LookupPhase::Success
            && !self.explanation_pending
            && self.explanation.is_none()
    }
}
