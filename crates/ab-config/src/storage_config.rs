use crate::DEFAULT_DATA_DIRECTORY;

use serde::Deserialize;

/// Where account data lives on disk.
///
/// `data_dir` may be absolute, or relative to the config directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::from(DEFAULT_DATA_DIRECTORY),
        }
    }
}
