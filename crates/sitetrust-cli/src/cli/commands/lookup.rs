//! `sitetrust lookup` – score, breakdown and (optionally) signals for a host.

use anyhow::{bail, Result};
use sitetrust_core::backend::HttpBackend;
use sitetrust_core::config::ClientConfig;
use sitetrust_core::host::Hostname;
use sitetrust_core::locale::{translate, Locale};
use sitetrust_core::orchestrator::{LookupOutcome, TrustDataOrchestrator};

use super::orchestrator;
use crate::cli::render;

pub async fn run_lookup(
    cfg: &ClientConfig,
    locale: Locale,
    input: &str,
    signals: bool,
) -> Result<()> {
    let Some(host) = sitetrust_core::host::normalize(input) else {
        bail!("{}", translate("invalidInput", locale));
    };
    let orch = orchestrator(cfg)?;
    show(&orch, host, locale, signals).await
}

/// Runs one lookup and prints the resulting snapshot.
pub(super) async fn show(
    orch: &TrustDataOrchestrator<HttpBackend>,
    host: Hostname,
    locale: Locale,
    signals: bool,
) -> Result<()> {
    println!("{} {}", translate("loading", locale), host);
    match orch.lookup(host).await {
        LookupOutcome::Loaded { .. } => {
            print!("{}", render::snapshot(&orch.snapshot(), locale, signals));
            Ok(())
        }
        LookupOutcome::Failed(err) => bail!("{err}"),
        LookupOutcome::Superseded => bail!("lookup superseded"),
    }
}
