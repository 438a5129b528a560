use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// Startup configuration failures. Setting errors name the dotted key
/// (`history.capacity`) and the rejected value.
#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} = '{value}': {reason} {location}")]
    InvalidSetting {
        key: &'static str,
        value: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Cannot locate config directory: {source} {location}")]
    ConfigDir {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid_setting(
        key: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidSetting {
            key,
            value: value.to_string(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Dotted key of the offending setting, if the error concerns one
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidSetting { key, .. } => Some(*key),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = Result<T, ConfigError>;
