use crate::{CoreError, MessageId, Result, Timestamp, format_instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// A published message. Immutable once constructed; shared as `Arc<Message>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    /// Opaque device identifiers, any JSON value
    pub device_id: Option<Value>,
    pub device_name: Option<Value>,
    pub timestamp: Timestamp,
    #[serde(serialize_with = "serialize_instant")]
    pub received_at: DateTime<Utc>,
}

impl Message {
    /// Build a message accepted at `received_at`.
    ///
    /// A missing `timestamp` falls back to `received_at`.
    #[track_caller]
    pub fn new(
        content: String,
        device_id: Option<Value>,
        device_name: Option<Value>,
        timestamp: Option<Timestamp>,
        received_at: DateTime<Utc>,
    ) -> Result<Self> {
        if content.is_empty() {
            return Err(CoreError::validation("content is required", "content"));
        }

        Ok(Self {
            id: MessageId::new(),
            content,
            device_id,
            device_name,
            timestamp: timestamp.unwrap_or_else(|| Timestamp::at(received_at)),
            received_at,
        })
    }
}

fn serialize_instant<S>(instant: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_instant(instant))
}
