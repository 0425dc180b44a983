//! Vote request/response payloads (`POST /v1/votes`) and the health probe.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::host::Hostname;

/// Community label. Only these three exist, so an invalid label cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteLabel {
    Safe,
    Suspicious,
    Danger,
}

impl VoteLabel {
    pub const ALL: [VoteLabel; 3] = [VoteLabel::Safe, VoteLabel::Suspicious, VoteLabel::Danger];

    pub fn as_str(self) -> &'static str {
        match self {
            VoteLabel::Safe => "safe",
            VoteLabel::Suspicious => "suspicious",
            VoteLabel::Danger => "danger",
        }
    }
}

impl fmt::Display for VoteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VoteLabel::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| format!("unknown vote label: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vote {
    pub host: Hostname,
    pub label: VoteLabel,
    pub reason: String,
}

impl Vote {
    pub fn new(host: Hostname, label: VoteLabel, reason: impl Into<String>) -> Self {
        Self {
            host,
            label,
            reason: reason.into(),
        }
    }
}

/// Acceptance body. Older backends send nothing useful, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VoteReceipt {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub new_score: Option<f64>,
}

/// `GET /v1/health` body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}
