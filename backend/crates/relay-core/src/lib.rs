pub mod admission_filter;
pub mod error;
pub mod history_buffer;
pub mod message;
pub mod message_id;
pub mod publish_request;
pub mod timestamp;

pub use admission_filter::AdmissionFilter;
pub use error::{CoreError, Result};
pub use history_buffer::HistoryBuffer;
pub use message::Message;
pub use message_id::MessageId;
pub use publish_request::{PublishRequest, coerce_text, is_truthy};
pub use timestamp::{Timestamp, format_instant};

#[cfg(test)]
mod tests;

/// Default number of messages retained for replay to late subscribers
pub const MAX_MESSAGES: usize = 200;

/// Substring that makes a message inadmissible (matched case-insensitively)
pub const BLOCKED_TERM: &str = "tick";
