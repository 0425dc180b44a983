//! Locale resolution and translation lookup.
//!
//! The active locale comes only from the `lang` query parameter; anything
//! outside the supported set resolves to English.

mod catalog;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use catalog::translate;

/// Supported UI locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh")]
    Zh,
    #[serde(rename = "zh-Hant")]
    ZhHant,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "es")]
    Es,
}

impl Locale {
    /// All locales, in language-switcher order.
    pub const ALL: [Locale; 5] = [
        Locale::En,
        Locale::Zh,
        Locale::ZhHant,
        Locale::Ja,
        Locale::Es,
    ];

    /// Value used in the `lang` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::ZhHant => "zh-Hant",
            Locale::Ja => "ja",
            Locale::Es => "es",
        }
    }

    /// Native-language label shown in the language switcher.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Zh => "中文",
            Locale::ZhHant => "繁體",
            Locale::Ja => "日本語",
            Locale::Es => "Español",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error for a `lang` value outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Exact, case-sensitive match against the locale codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// Resolves the active locale from an optional `lang` parameter.
pub fn resolve(query_param: Option<&str>) -> Locale {
    query_param
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

/// Resolves the active locale from a raw query string such as `lang=ja&x=1`.
///
/// A leading `?` is tolerated. The first `lang` pair wins.
pub fn resolve_query(query: &str) -> Locale {
    let query = query.strip_prefix('?').unwrap_or(query);
    let lang = url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == "lang")
        .map(|(_, v)| v.into_owned());
    resolve(lang.as_deref())
}
