use crate::{ConfigError, ConfigErrorResult, DEFAULT_STATIC_DIR, DEFAULT_STATIC_INDEX};

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Asset root directory
    pub dir: String,
    /// File served for `/`
    pub index: String,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STATIC_DIR),
            index: String::from(DEFAULT_STATIC_INDEX),
        }
    }
}

impl StaticConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::invalid_setting("static.dir", &self.dir, "cannot be empty"));
        }

        if self.index.is_empty()
            || self.index.contains('/')
            || self.index.contains('\\')
            || self.index == "."
            || self.index == ".."
        {
            return Err(ConfigError::invalid_setting(
                "static.index",
                &self.index,
                "must be a plain file name",
            ));
        }

        Ok(())
    }

    pub fn root(&self) -> PathBuf {
        PathBuf::from(&self.dir)
    }
}
