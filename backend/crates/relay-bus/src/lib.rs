pub mod broadcast_bus;
pub mod bus_config;
pub mod error;
pub mod metrics;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod submit_outcome;
pub mod subscriber_id;
pub mod subscriber_registry;
pub mod subscription;

pub use broadcast_bus::BroadcastBus;
pub use bus_config::BusConfig;
pub use error::{BusError, Result};
pub use metrics::Metrics;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use submit_outcome::SubmitOutcome;
pub use subscriber_id::SubscriberId;
pub use subscriber_registry::{FanOut, SubscriberRegistry};
pub use subscription::Subscription;

#[cfg(test)]
mod tests;
