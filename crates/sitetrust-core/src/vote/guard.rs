//! RAII guard that returns the controller to `Ready` when dropped.

use tokio::sync::watch;

use super::{VotePhase, VoteStatus};

/// Leaves `Submitting` on drop, even if the submit future is cancelled.
pub(super) struct SubmittingGuard<'a> {
    pub(super) status: &'a watch::Sender<VoteStatus>,
    pub(super) error: Option<String>,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        let error = self.error.take();
        self.status.send_modify(|s| {
            s.phase = VotePhase::Ready;
            s.last_error = error;
        });
    }
}
