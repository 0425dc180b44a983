//! Site score payload (`GET /v1/sites/{host}`).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::SchemaError;
use crate::host::Hostname;

/// Coarse risk tier assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Green,
    Amber,
    Red,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Green => "green",
            Level::Amber => "amber",
            Level::Red => "red",
        }
    }
}

/// Four-factor decomposition of the score, each factor in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Security.
    #[serde(rename = "S")]
    pub security: f64,
    /// Credibility.
    #[serde(rename = "C")]
    pub credibility: f64,
    /// Transparency.
    #[serde(rename = "T")]
    pub transparency: f64,
    /// Community. The backend omits it before any vote exists.
    #[serde(rename = "U", default)]
    pub community: f64,
}

impl Breakdown {
    fn validate(&self) -> Result<(), SchemaError> {
        for (field, v) in [
            ("breakdown.S", self.security),
            ("breakdown.C", self.credibility),
            ("breakdown.T", self.transparency),
            ("breakdown.U", self.community),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(SchemaError::new(field, format!("{v} outside [0, 1]")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteScore {
    pub host: Hostname,
    pub score: f64,
    pub level: Level,
    pub breakdown: Breakdown,
    #[serde(default)]
    pub u_included: bool,
    #[serde(default)]
    pub votes_total: u64,
    pub updated_at: DateTime<FixedOffset>,
}

impl SiteScore {
    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if !(0.0..=100.0).contains(&self.score) {
            return Err(SchemaError::new(
                "score",
                format!("{} outside [0, 100]", self.score),
            ));
        }
        self.breakdown.validate()
    }

    /// True when the community factor does not yet contribute to the score.
    pub fn community_pending(&self) -> bool {
        !self.u_included || self.votes_total == 0
    }
}
