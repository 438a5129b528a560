use relay_bus::{BroadcastBus, BusConfig, Subscription};
use relay_core::{Message, PublishRequest};

use std::sync::Arc;
use std::time::Duration;

/// Bus with the production history size and a roomy queue
pub fn create_test_bus() -> BroadcastBus {
    create_test_bus_with(BusConfig {
        subscriber_buffer_size: 1024,
        ..BusConfig::default()
    })
}

pub fn create_test_bus_with(config: BusConfig) -> BroadcastBus {
    BroadcastBus::new(config).unwrap()
}

pub fn submit_text(bus: &BroadcastBus, content: &str) -> Arc<Message> {
    bus.submit(PublishRequest::text(content)).unwrap().message
}

/// Receive `count` messages or fail after a short timeout
pub async fn recv_n(subscription: &mut Subscription, count: usize) -> Vec<String> {
    let mut received = Vec::with_capacity(count);
    while received.len() < count {
        let message = tokio::time::timeout(Duration::from_secs(2), subscription.recv())
            .await
            .expect("timed out waiting for message")
            .expect("subscription closed early");
        received.push(message.content.clone());
    }
    received
}

pub fn contents(messages: &[Arc<Message>]) -> Vec<String> {
    messages.iter().map(|m| m.content.clone()).collect()
}
