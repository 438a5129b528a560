use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY,
    MIN_HISTORY_CAPACITY,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Messages retained for replay to new subscribers
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl HistoryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_HISTORY_CAPACITY..=MAX_HISTORY_CAPACITY).contains(&self.capacity) {
            return Err(ConfigError::invalid_setting(
                "history.capacity",
                self.capacity,
                format!("must be {MIN_HISTORY_CAPACITY}-{MAX_HISTORY_CAPACITY}"),
            ));
        }

        Ok(())
    }
}
