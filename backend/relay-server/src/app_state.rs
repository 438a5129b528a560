use relay_bus::{BroadcastBus, ShutdownCoordinator};
use relay_config::{EventsConfig, StaticConfig};

/// Shared application state for HTTP and event stream handlers
#[derive(Clone)]
pub struct AppState {
    pub bus: BroadcastBus,
    pub shutdown: ShutdownCoordinator,
    pub events: EventsConfig,
    pub static_files: StaticConfig,
}
