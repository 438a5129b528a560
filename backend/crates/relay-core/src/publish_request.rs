use crate::{CoreError, Message, Result, Timestamp};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::Deserialize;
use serde_json::{Number, Value};

/// Raw publish payload as received from a client.
///
/// Fields stay untyped until [`PublishRequest::into_message`]. Content is
/// coerced to text; device fields and the timestamp keep their JSON shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub device_id: Option<Value>,
    #[serde(default)]
    pub device_name: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Value>,
}

impl PublishRequest {
    /// Request carrying only text content
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(Value::String(content.into())),
            ..Self::default()
        }
    }

    pub fn with_device(mut self, device_id: &str, device_name: &str) -> Self {
        self.device_id = Some(Value::String(device_id.to_string()));
        self.device_name = Some(Value::String(device_name.to_string()));
        self
    }

    /// Parse a request body. An empty body is treated as an empty object.
    #[track_caller]
    pub fn from_json(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body).map_err(|e| CoreError::MalformedPayload {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if !value.is_object() {
            return Err(CoreError::MalformedPayload {
                message: "payload must be a JSON object".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        serde_json::from_value(value).map_err(|e| CoreError::MalformedPayload {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Validate and convert into a [`Message`] accepted at `received_at`
    #[track_caller]
    pub fn into_message(self, received_at: DateTime<Utc>) -> Result<Message> {
        let content = self
            .content
            .as_ref()
            .and_then(coerce_text)
            .ok_or_else(|| CoreError::validation("content is required", "content"))?;

        Message::new(
            content,
            self.device_id.filter(is_truthy),
            self.device_name.filter(is_truthy),
            self.timestamp.as_ref().and_then(Timestamp::from_value),
            received_at,
        )
    }
}

/// Coerce a payload value to text.
///
/// Strings pass through, non-zero numbers and `true` become their text form.
/// Falsy values (null, false, 0, "") and structured values yield None.
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if is_truthy(value) => Some(number_text(n)),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// JSON truthiness: null, false, 0 and "" are falsy, everything else is truthy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whole-valued floats print without a fraction (`1.0` -> `"1"`)
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}
