use relay_core::Message;

use std::sync::Arc;

use serde::Serialize;

/// Visible history, oldest first
#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<Arc<Message>>,
}
