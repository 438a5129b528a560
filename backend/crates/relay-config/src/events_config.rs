use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_EVENTS_BUFFER_SIZE, DEFAULT_KEEP_ALIVE_SECS,
    MAX_EVENTS_BUFFER_SIZE, MIN_EVENTS_BUFFER_SIZE,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Per-subscriber queue length; a subscriber that falls this far behind is dropped
    pub buffer_size: usize,
    /// Interval between keep-alive comments on the event stream (0 = disabled)
    pub keep_alive_secs: u64,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_EVENTS_BUFFER_SIZE,
            keep_alive_secs: DEFAULT_KEEP_ALIVE_SECS,
        }
    }
}

impl EventsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_EVENTS_BUFFER_SIZE..=MAX_EVENTS_BUFFER_SIZE).contains(&self.buffer_size) {
            return Err(ConfigError::invalid_setting(
                "events.buffer_size",
                self.buffer_size,
                format!("must be {MIN_EVENTS_BUFFER_SIZE}-{MAX_EVENTS_BUFFER_SIZE}"),
            ));
        }

        Ok(())
    }
}
