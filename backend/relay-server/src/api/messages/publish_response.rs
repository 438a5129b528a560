use relay_core::Message;

use std::sync::Arc;

use serde::Serialize;

/// Publish acknowledgement. Returned for filtered messages too.
#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub ok: bool,
    pub message: Arc<Message>,
}
