//! `sitetrust health` – probe `GET /v1/health`.

use anyhow::{Context, Result};
use sitetrust_core::config::ClientConfig;
use sitetrust_core::locale::{translate, Locale};

use super::http_backend;

pub async fn run_health(cfg: &ClientConfig, locale: Locale) -> Result<()> {
    let backend = http_backend(cfg)?;
    let health = backend.health().await.with_context(|| {
        format!(
            "{} unreachable at {}",
            translate("apiHealth", locale),
            cfg.api_base
        )
    })?;
    println!(
        "{}: {} {} {} {}",
        translate("apiHealth", locale),
        if health.ok { "ok" } else { "degraded" },
        health.service.as_deref().unwrap_or("-"),
        health.version.as_deref().unwrap_or("-"),
        health.time.as_deref().unwrap_or("-"),
    );
    Ok(())
}
