mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const APP_DIRECTORY_NAME: &str = "addressbook";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_DATA_DIRECTORY: &str = "data";
const DEFAULT_DATABASE_FILENAME: &str = "addressbook.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
