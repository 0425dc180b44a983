//! CLI command handlers, one file per command.

mod health;
mod locales;
mod lookup;
mod normalize;
mod open;
mod vote;

pub use health::run_health;
pub use locales::run_locales;
pub use lookup::run_lookup;
pub use normalize::run_normalize;
pub use open::run_open;
pub use vote::{run_vote, VoteArgs};

use std::sync::Arc;

use anyhow::{Context, Result};
use sitetrust_core::backend::HttpBackend;
use sitetrust_core::config::ClientConfig;
use sitetrust_core::orchestrator::TrustDataOrchestrator;

fn http_backend(cfg: &ClientConfig) -> Result<HttpBackend> {
    HttpBackend::from_config(cfg).with_context(|| format!("invalid api_base {:?}", cfg.api_base))
}

fn orchestrator(cfg: &ClientConfig) -> Result<TrustDataOrchestrator<HttpBackend>> {
    let backend = http_backend(cfg)?;
    Ok(TrustDataOrchestrator::new(Arc::new(backend), cfg.fetch_timeout()))
}
