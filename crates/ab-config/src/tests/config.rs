use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, ok, some};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.storage.data_dir, eq(crate::DEFAULT_DATA_DIRECTORY));
    assert_that!(
        config.database.max_connections,
        eq(crate::DEFAULT_MAX_CONNECTIONS)
    );
    assert_that!(
        config.database.default_filename,
        eq(crate::DEFAULT_DATABASE_FILENAME)
    );
    assert_that!(config.logging.file, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [storage]
              data_dir = "accounts"

              [database]
              max_connections = 2

              [logging]
              level = "debug"
              colored = false
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.storage.data_dir, eq("accounts"));
    assert_that!(config.database.max_connections, eq(2));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [database]
              max_connections = 2
          "#,
    )
    .unwrap();
    let _max = EnvGuard::set("AB_DATABASE_MAX_CONNECTIONS", "8");
    let _file = EnvGuard::set("AB_LOG_FILE", "addressbook.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.database.max_connections, eq(8));
    assert_that!(config.logging.file.as_deref(), some(eq("addressbook.log")));
}

#[test]
#[serial]
fn given_relative_data_dir_when_resolving_paths_then_rooted_in_config_dir() {
    // Given
    let (temp, _guards) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.data_dir().unwrap(), eq(&temp.path().join("data")));
    assert_that!(
        config.preferences_dir().unwrap(),
        eq(&temp.path().join("data").join("preferences"))
    );
    assert_that!(
        config.databases_dir().unwrap(),
        eq(&temp.path().join("data").join("databases"))
    );
}

#[test]
#[serial]
fn given_absolute_data_dir_when_resolving_paths_then_used_as_is() {
    // Given
    let (_temp, _guards) = setup_config_dir();
    let elsewhere = tempfile::TempDir::new().unwrap();
    let _data = EnvGuard::set("AB_DATA_DIR", elsewhere.path().to_str().unwrap());

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
    assert_that!(config.data_dir().unwrap(), eq(&elsewhere.path().to_path_buf()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let (temp, _guards) = setup_config_dir();
    let nested = temp.path().join("nested").join("config");
    let _dir = EnvGuard::set("AB_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.is_dir(), eq(true));
}
