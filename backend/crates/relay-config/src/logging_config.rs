use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL,
};

use std::path::Path;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`, any case
    pub level: String,
    /// Log directory, relative to the config directory
    pub dir: String,
    /// Log file name inside `dir` (None = stdout)
    pub file: Option<String>,
    /// Colored level names (ignored when logging to file)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: DEFAULT_LOG_COLORED,
        }
    }
}

impl LoggingConfig {
    /// Parsed `level`
    pub fn level_filter(&self) -> ConfigErrorResult<LevelFilter> {
        LevelFilter::from_str(self.level.trim()).map_err(|_| {
            ConfigError::invalid_setting(
                "logging.level",
                &self.level,
                "expected off, error, warn, info, debug or trace",
            )
        })
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.level_filter()?;

        if let Some(ref file) = self.file
            && (file.contains("..") || Path::new(file).is_absolute())
        {
            return Err(ConfigError::invalid_setting(
                "logging.file",
                file,
                "must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
