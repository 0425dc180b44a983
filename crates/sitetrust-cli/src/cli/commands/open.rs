//! `sitetrust open` – resolve a `/site/{host}?lang=` route and show it.

use anyhow::{Context, Result};
use sitetrust_core::config::ClientConfig;
use sitetrust_core::route::SiteRoute;

use super::{lookup, orchestrator};
use crate::cli::render;

/// The route's own `lang` decides the locale, as a shared link would.
pub async fn run_open(cfg: &ClientConfig, route: &str, signals: bool) -> Result<()> {
    let route = SiteRoute::parse(route).with_context(|| format!("cannot open {route:?}"))?;
    tracing::debug!(%route, "opening site route");
    let orch = orchestrator(cfg)?;
    lookup::show(&orch, route.host.clone(), route.locale, signals).await?;
    println!("{}", render::language_links(&route));
    Ok(())
}
