use crate::{
    APP_DIRECTORY_NAME, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DatabaseConfig,
    LoggingConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

const PREFERENCES_DIRECTORY: &str = "preferences";
const DATABASES_DIRECTORY: &str = "databases";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Resolve the config directory (AB_CONFIG_DIR, else the platform
    ///    local data directory + `addressbook/`)
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply AB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AB_CONFIG_DIR env var > <local data dir>/addressbook/
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("AB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIRECTORY_NAME))
            .ok_or(ConfigError::NoDataDir)
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.database.validate()?;

        let data_dir = Path::new(&self.storage.data_dir);
        if self.storage.data_dir.trim().is_empty() {
            return Err(ConfigError::storage("storage.data_dir cannot be empty"));
        }
        if !data_dir.is_absolute() && self.storage.data_dir.contains("..") {
            return Err(ConfigError::storage(
                "relative storage.data_dir cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute data directory: as configured if absolute, else under the
    /// config directory.
    pub fn data_dir(&self) -> ConfigErrorResult<PathBuf> {
        let data_dir = PathBuf::from(&self.storage.data_dir);
        if data_dir.is_absolute() {
            return Ok(data_dir);
        }
        Ok(Self::config_dir()?.join(data_dir))
    }

    /// Directory holding the key-value namespaces.
    pub fn preferences_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(self.data_dir()?.join(PREFERENCES_DIRECTORY))
    }

    /// Directory holding one database file per account.
    pub fn databases_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(self.data_dir()?.join(DATABASES_DIRECTORY))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  storage: data_dir={}", self.storage.data_dir);
        info!(
            "  database: max_connections={}, default_filename={}",
            self.database.max_connections, self.database.default_filename
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("<stderr>")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_string("AB_DATA_DIR", &mut self.storage.data_dir);

        // Database
        Self::apply_env_parse(
            "AB_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("AB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("AB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
