//! Explanation payload (`GET /v1/sites/{host}/explain`) and derived signals.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SchemaError;

/// Signal key set by the backend when Google Safe Browsing lists the host.
pub const GSB_FLAGGED_KEY: &str = "google_safe_browsing_flagged";

/// One named fact backing the score. `value` is free-form JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub key: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub signals: Vec<Signal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl Explanation {
    pub fn validate(&self) -> Result<(), SchemaError> {
        if let Some(i) = self.signals.iter().position(|s| s.key.is_empty()) {
            return Err(SchemaError::new("signals", format!("signal {i} has an empty key")));
        }
        Ok(())
    }

    /// First signal with the given key, in payload order.
    pub fn signal(&self, key: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.key == key)
    }
}

/// JavaScript-style truthiness of a JSON value.
///
/// `null`, `false`, `0`, `NaN` and `""` are falsy; arrays and objects are
/// truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// True iff a `google_safe_browsing_flagged` signal exists with a truthy value.
///
/// Only the first signal with that key is consulted.
pub fn gsb_flagged(explanation: Option<&Explanation>) -> bool {
    explanation
        .and_then(|e| e.signal(GSB_FLAGGED_KEY))
        .is_some_and(|s| is_truthy(&s.value))
}
