//! Client-facing addressing: `/site/{host}?lang={locale}`.

use std::fmt;

use crate::host::{self, Hostname};
use crate::locale::{self, Locale};

const SITE_PREFIX: &str = "/site/";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("not a site route: {0}")]
    NotASiteRoute(String),
    #[error("site route has no host")]
    MissingHost,
    #[error("host segment is not valid UTF-8 after decoding")]
    BadEncoding,
}

/// A lookup address: the host being viewed and the UI locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRoute {
    pub host: Hostname,
    pub locale: Locale,
}

impl SiteRoute {
    pub fn new(host: Hostname, locale: Locale) -> Self {
        Self { host, locale }
    }

    /// Parses a path plus optional query, e.g. `/site/example.com?lang=ja`.
    ///
    /// The host segment is percent-decoded and normalized, so
    /// `/site/https%3A%2F%2FExample.com%2Fx` addresses `example.com`.
    /// An unknown or missing `lang` resolves to English.
    pub fn parse(path_and_query: &str) -> Result<Self, RouteError> {
        let (path, query) = match path_and_query.split_once('?') {
            Some((p, q)) => (p, q),
            None => (path_and_query, ""),
        };
        let raw = path
            .strip_prefix(SITE_PREFIX)
            .ok_or_else(|| RouteError::NotASiteRoute(path.to_string()))?;
        let raw = raw.strip_suffix('/').unwrap_or(raw);
        let decoded = urlencoding::decode(raw).map_err(|_| RouteError::BadEncoding)?;
        let host = host::normalize(&decoded).ok_or(RouteError::MissingHost)?;
        Ok(Self {
            host,
            locale: locale::resolve_query(query),
        })
    }

    /// Same host, different locale (language switcher links).
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            host: self.host.clone(),
            locale,
        }
    }

    pub fn to_path(&self) -> String {
        format!(
            "{SITE_PREFIX}{}?lang={}",
            urlencoding::encode(self.host.as_str()),
            urlencoding::encode(self.locale.code())
        )
    }
}

impl fmt::Display for SiteRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}
