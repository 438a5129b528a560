mod config;
mod error;
mod events_config;
mod history_config;
mod logging_config;
mod server_config;
mod static_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use events_config::EventsConfig;
pub use history_config::HistoryConfig;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use static_config::StaticConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_HISTORY_CAPACITY: usize = 200;
const MIN_HISTORY_CAPACITY: usize = 1;
const MAX_HISTORY_CAPACITY: usize = 10_000;
const DEFAULT_EVENTS_BUFFER_SIZE: usize = 256;
const MIN_EVENTS_BUFFER_SIZE: usize = 1;
const MAX_EVENTS_BUFFER_SIZE: usize = 65_536;
const DEFAULT_KEEP_ALIVE_SECS: u64 = 15;
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_STATIC_INDEX: &str = "index.html";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
const CONFIG_DIR_ENV: &str = "RELAY_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".relay";
const CONFIG_FILE_NAME: &str = "config.toml";
