
use crate::{BroadcastBus, BusConfig};

pub(crate) fn bus_with(history_capacity: usize, subscriber_buffer_size: usize) -> BroadcastBus {
    BroadcastBus::new(BusConfig {
        history_capacity,
        subscriber_buffer_size,
    })
    .unwrap()
}

pub(crate) fn contents(messages: &[std::sync::Arc<relay_core::Message>]) -> Vec<String> {
    messages.iter().map(|m| m.content.clone()).collect()
}
