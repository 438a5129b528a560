use crate::publish_request::is_truthy;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Client-supplied logical time, passed through verbatim.
///
/// Any truthy JSON value is kept as sent, so `1714566600000`, `"yesterday"`
/// and even `true` all echo back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(Value);

impl Timestamp {
    /// Falsy values (null, false, 0, "") yield None
    pub fn from_value(value: &Value) -> Option<Self> {
        is_truthy(value).then(|| Timestamp(value.clone()))
    }

    /// Server-observed time, used when the client did not supply one
    pub fn at(instant: DateTime<Utc>) -> Self {
        Timestamp(Value::String(format_instant(&instant)))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
