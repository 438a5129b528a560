use relay_core::Message;

use std::sync::Arc;

/// Result of a successful submit.
///
/// `message` is returned whether or not the admission filter accepted it.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub message: Arc<Message>,
    /// False when the admission filter silently dropped the message
    pub admitted: bool,
    /// Subscribers the message was queued for
    pub delivered: usize,
}
