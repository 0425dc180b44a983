//! `sitetrust normalize` – offline hostname normalization.

use anyhow::{bail, Result};
use sitetrust_core::host::{normalize_detailed, Normalized};
use sitetrust_core::locale::{translate, Locale};

pub fn run_normalize(locale: Locale, input: &str) -> Result<()> {
    match normalize_detailed(input) {
        Normalized::Parsed(host) => println!("{host}"),
        Normalized::Fallback(host) => {
            tracing::debug!(input, %host, "URL parser rejected input, used fallback");
            println!("{host}");
        }
        Normalized::Empty => bail!("{}", translate("invalidInput", locale)),
    }
    Ok(())
}
