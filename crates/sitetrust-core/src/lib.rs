//! Client core for SiteTrust.
//!
//! Free-text input is normalized into a [`host::Hostname`], looked up through
//! the [`orchestrator::TrustDataOrchestrator`] (score and explanation fetched
//! concurrently, stale results discarded by generation), and voted on through
//! the [`vote::VoteSubmissionController`].

pub mod backend;
pub mod config;
pub mod error;
pub mod host;
pub mod locale;
pub mod logging;
pub mod model;
pub mod orchestrator;
pub mod retry;
pub mod route;
pub mod vote;

pub use error::TrustError;
