//! Trust-data orchestration.
//!
//! One lookup cycle per host: the score and explanation requests run
//! concurrently and each result is applied as soon as it lands, but only if
//! the generation it was issued under is still current. Superseded results
//! are dropped, never merged; in-flight requests are not cancelled.

mod snapshot;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::backend::{FetchError, TrustBackend};
use crate::error::TrustError;
use crate::host::{self, Hostname};
use crate::model::{gsb_flagged, Explanation, SiteScore};

pub use snapshot::{LookupPhase, TrustSnapshot};

/// How a lookup settled, from the caller's point of view.
#[derive(Debug)]
pub enum LookupOutcome {
    /// Score displayed. `partial` means the explanation was unavailable.
    Loaded { partial: bool },
    /// Score request failed; the snapshot is in the error state.
    Failed(TrustError),
    /// Another lookup started meanwhile; nothing from this one was kept.
    Superseded,
}

/// Result of a score-only refresh that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The new score replaced the displayed one.
    Applied(SiteScore),
    /// The active host or generation changed; the score was dropped.
    Discarded,
}

/// Coordinates score and explanation fetches for the active host.
///
/// Cloning is cheap and every clone drives the same state.
pub struct TrustDataOrchestrator<B> {
    backend: Arc<B>,
    state: Arc<watch::Sender<TrustSnapshot>>,
    fetch_timeout: Duration,
}

impl<B> Clone for TrustDataOrchestrator<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            state: Arc::clone(&self.state),
            fetch_timeout: self.fetch_timeout,
        }
    }
}

impl<B: TrustBackend> TrustDataOrchestrator<B> {
    pub fn new(backend: Arc<B>, fetch_timeout: Duration) -> Self {
        let (state, _) = watch::channel(TrustSnapshot::default());
        Self {
            backend,
            state: Arc::new(state),
            fetch_timeout,
        }
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Current state (polling interface).
    pub fn snapshot(&self) -> TrustSnapshot {
        self.state.borrow().clone()
    }

    /// Receiver notified on every applied transition (observer interface).
    pub fn subscribe(&self) -> watch::Receiver<TrustSnapshot> {
        self.state.subscribe()
    }

    pub fn active_host(&self) -> Option<Hostname> {
        self.state.borrow().host.clone()
    }

    /// Normalizes `input` and looks it up. Blank input never reaches the network.
    pub async fn lookup_input(&self, input: &str) -> Result<LookupOutcome, TrustError> {
        let host = host::normalize(input).ok_or(TrustError::InputEmpty)?;
        Ok(self.lookup(host).await)
    }

    /// Re-runs the lookup for the active host.
    pub async fn retry(&self) -> Result<LookupOutcome, TrustError> {
        let host = self.active_host().ok_or(TrustError::NoActiveHost)?;
        Ok(self.lookup(host).await)
    }

    /// Starts a new generation for `host` and runs both fetches to completion.
    pub async fn lookup(&self, host: Hostname) -> LookupOutcome {
        let generation = self.begin(&host);
        tracing::debug!(%host, generation, "lookup started");

        let score_task = async {
            let result = self.timed(self.backend.fetch_score(&host)).await;
            self.apply_score(generation, &host, result)
        };
        let explanation_task = async {
            let result = self.timed(self.backend.fetch_explanation(&host)).await;
            self.apply_explanation(generation, &host, result);
        };
        let (score, ()) = tokio::join!(score_task, explanation_task);

        let snapshot = self.state.borrow();
        if snapshot.generation != generation {
            return LookupOutcome::Superseded;
        }
        match score {
            Err(e) => LookupOutcome::Failed(TrustError::PrimaryFetchFailed(e)),
            Ok(()) => LookupOutcome::Loaded {
                partial: snapshot.explanation.is_none(),
            },
        }
    }

    /// Re-fetches only the score for the active host and generation.
    ///
    /// On failure the displayed score is left untouched and the error is
    /// recorded in `refresh_error`.
    pub async fn refresh_score(&self) -> Result<RefreshOutcome, TrustError> {
        let (host, generation) = self.active()?;
        self.refresh(host, generation).await
    }

    /// Like [`refresh_score`](Self::refresh_score), but only while `host` is
    /// still the active host.
    pub async fn refresh_host(&self, host: &Hostname) -> Result<RefreshOutcome, TrustError> {
        let (active, generation) = self.active()?;
        if &active != host {
            tracing::debug!(%host, %active, "host no longer active, skipping refresh");
            return Ok(RefreshOutcome::Discarded);
        }
        self.refresh(active, generation).await
    }

    fn active(&self) -> Result<(Hostname, u64), TrustError> {
        let snapshot = self.state.borrow();
        let host = snapshot.host.clone().ok_or(TrustError::NoActiveHost)?;
        Ok((host, snapshot.generation))
    }

    fn begin(&self, host: &Hostname) -> u64 {
        let mut generation = 0;
        self.state.send_modify(|s| {
            generation = s.generation + 1;
            *s = TrustSnapshot::started(host.clone(), generation);
        });
        generation
    }

    async fn refresh(&self, host: Hostname, generation: u64) -> Result<RefreshOutcome, TrustError> {
        match self.timed(self.backend.fetch_score(&host)).await {
            Ok(score) => {
                let applied = self.apply_if_current(generation, |s| {
                    s.score = Some(score.clone());
                    s.phase = LookupPhase::Success;
                    s.error = None;
                    s.refresh_error = None;
                    true
                });
                if applied {
                    tracing::debug!(%host, generation, score = score.score, "score refreshed");
                    Ok(RefreshOutcome::Applied(score))
                } else {
                    tracing::debug!(%host, generation, "discarding stale refresh");
                    Ok(RefreshOutcome::Discarded)
                }
            }
            Err(e) => {
                tracing::warn!(%host, generation, error = %e, "score refresh failed");
                let message = e.to_string();
                self.apply_if_current(generation, |s| {
                    s.refresh_error = Some(message);
                    true
                });
                Err(TrustError::RefreshFailed(e))
            }
        }
    }

    fn apply_score(
        &self,
        generation: u64,
        host: &Hostname,
        result: Result<SiteScore, FetchError>,
    ) -> Result<(), FetchError> {
        match result {
            Ok(score) => {
                let applied = self.apply_if_current(generation, |s| {
                    s.score = Some(score);
                    s.phase = LookupPhase::Success;
                    s.error = None;
                    true
                });
                if !applied {
                    tracing::debug!(%host, generation, "discarding stale score");
                }
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                let applied = self.apply_if_current(generation, |s| {
                    s.phase = LookupPhase::Error;
                    s.score = None;
                    s.explanation = None;
                    s.gsb_flagged = false;
                    s.error = Some(message);
                    true
                });
                if applied {
                    tracing::warn!(%host, generation, error = %e, "score request failed");
                }
                Err(e)
            }
        }
    }

    fn apply_explanation(
        &self,
        generation: u64,
        host: &Hostname,
        result: Result<Explanation, FetchError>,
    ) {
        let explanation = match result {
            Ok(e) => Some(e),
            Err(e) => {
                let err = TrustError::SecondaryFetchFailed(e);
                tracing::warn!(%host, generation, error = %err, "continuing without explanation");
                None
            }
        };
        let applied = self.apply_if_current(generation, |s| {
            s.explanation_pending = false;
            // A failed score owns the error state; its explanation is never shown.
            if s.phase != LookupPhase::Error {
                s.gsb_flagged = gsb_flagged(explanation.as_ref());
                s.explanation = explanation;
            }
            true
        });
        if !applied {
            tracing::debug!(%host, generation, "discarding stale explanation");
        }
    }

    /// Runs `update` only if `generation` is still current; returns whether
    /// the state changed. Check and write happen under one lock.
    fn apply_if_current(
        &self,
        generation: u64,
        update: impl FnOnce(&mut TrustSnapshot) -> bool,
    ) -> bool {
        self.state.send_if_modified(|s| {
            if s.generation != generation {
                return false;
            }
            update(s)
        })
    }

    async fn timed<T>(
        &self,
        fut: impl Future<Output = Result<T, FetchError>>,
    ) -> Result<T, FetchError> {
        tokio::time::timeout(self.fetch_timeout, fut)
            .await
            .unwrap_or_else(|_| Err(FetchError::Timeout(self.fetch_timeout)))
    }
}
