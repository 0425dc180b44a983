//! Host normalization.
//!
//! Turns free-text user input (bare domains, full URLs, pasted links) into the
//! canonical hostname used to key every lookup and vote. Strict WHATWG URL
//! parsing is tried first; input the parser rejects falls back to a manual
//! strip that keeps whatever precedes the first path separator.

mod fallback;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrustError;

pub use fallback::strip_scheme_and_path;

/// Scheme prepended to input that does not carry one, so it parses as a URL.
const DEFAULT_SCHEME: &str = "http://";

/// Canonical, non-empty hostname (no scheme, port, path or trailing slash).
///
/// The only constructors go through [`normalize`], so holding a `Hostname`
/// means the value was accepted by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hostname(String);

impl Hostname {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Hostname {
    type Err = TrustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s).ok_or(TrustError::InputEmpty)
    }
}

impl TryFrom<String> for Hostname {
    type Error = TrustError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Hostname> for String {
    fn from(host: Hostname) -> Self {
        host.0
    }
}

/// Which path of the normalizer produced a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// Input was blank, or parsed to a URL without a host.
    Empty,
    /// Strict URL parse succeeded; userinfo, port and path are gone.
    Parsed(Hostname),
    /// Strict parse failed; scheme prefix and path were stripped by hand.
    /// Ports and userinfo are left in place on this path.
    Fallback(Hostname),
}

impl Normalized {
    pub fn into_hostname(self) -> Option<Hostname> {
        match self {
            Normalized::Empty => None,
            Normalized::Parsed(h) | Normalized::Fallback(h) => Some(h),
        }
    }
}

/// Normalizes raw input into a [`Hostname`], or `None` when there is no input.
///
/// # Examples
///
/// - `normalize("https://user@Example.COM:8080/path")` → `example.com`
/// - `normalize("example.com/a/b")` → `example.com`
/// - `normalize("   ")` → `None`
pub fn normalize(input: &str) -> Option<Hostname> {
    normalize_detailed(input).into_hostname()
}

/// Like [`normalize`], but reports whether the strict or fallback path was used.
pub fn normalize_detailed(input: &str) -> Normalized {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Normalized::Empty;
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{trimmed}")
    };

    match url::Url::parse(&candidate) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => Normalized::Parsed(Hostname(host.to_string())),
            _ => Normalized::Empty,
        },
        Err(e) => {
            tracing::debug!(input = trimmed, error = %e, "strict URL parse failed, stripping by hand");
            let stripped = strip_scheme_and_path(trimmed);
            if stripped.is_empty() {
                Normalized::Empty
            } else {
                Normalized::Fallback(Hostname(stripped.to_string()))
            }
        }
    }
}
