use relay_core::MAX_MESSAGES;

/// Configuration for the broadcast bus
#[derive(Debug, Clone)]
pub struct BusConfig {
    /// Messages kept for replay to new subscribers
    pub history_capacity: usize,
    /// Per-subscriber queue length; a full queue evicts the subscriber
    pub subscriber_buffer_size: usize,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            history_capacity: MAX_MESSAGES,
            subscriber_buffer_size: 256,
        }
    }
}
