use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, DEFAULT_MAX_CONNECTIONS};

use serde::Deserialize;

pub const MIN_MAX_CONNECTIONS: u32 = 1;
pub const MAX_MAX_CONNECTIONS: u32 = 32;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Pool size for each per-account database
    pub max_connections: u32,
    /// File used when no account email is known
    pub default_filename: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            default_filename: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_MAX_CONNECTIONS..=MAX_MAX_CONNECTIONS).contains(&self.max_connections) {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_MAX_CONNECTIONS, MAX_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if self.default_filename.is_empty()
            || self.default_filename.contains('/')
            || self.default_filename.contains('\\')
        {
            return Err(ConfigError::database(
                "database.default_filename must be a plain file name",
            ));
        }

        Ok(())
    }
}
