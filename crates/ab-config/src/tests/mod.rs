mod config;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory, point AB_CONFIG_DIR at it and clear the
/// other AB_* overrides for the duration of the test.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set("AB_CONFIG_DIR", temp.path().to_str().unwrap()),
        EnvGuard::remove("AB_DATA_DIR"),
        EnvGuard::remove("AB_DATABASE_MAX_CONNECTIONS"),
        EnvGuard::remove("AB_LOG_LEVEL"),
        EnvGuard::remove("AB_LOG_COLORED"),
        EnvGuard::remove("AB_LOG_FILE"),
    ];
    (temp, guards)
}
