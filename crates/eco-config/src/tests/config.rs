use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _guard = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.storage.path.as_str(), eq("users.json"));
    assert_that!(config.auth.admin_email.as_str(), eq("admin@recife.gov.br"));
    assert_that!(config.scanner.delay_ms, eq(2000));
    assert_that!(config.scanner.success_rate, eq(0.8));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _guard = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [storage]
              path = "directory.json"

              [scanner]
              delay_ms = 250
              success_rate = 0.5
          "#,
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.storage.path.as_str(), eq("directory.json"));
    assert_that!(config.scanner.delay_ms, eq(250));
    assert_that!(config.scanner.success_rate, eq(0.5));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[scanner]\ndelay_ms = 9000").unwrap();
    let _delay_guard = EnvGuard::set("ECO_SCANNER_DELAY_MS", "100");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.scanner.delay_ms, eq(100));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _guard = setup_config_dir();
    let _storage = EnvGuard::set("ECO_STORAGE_PATH", "override.json");
    let _email = EnvGuard::set("ECO_ADMIN_EMAIL", "prefeitura@recife.gov.br");
    let _rate = EnvGuard::set("ECO_SCANNER_SUCCESS_RATE", "1.0");
    let _colored = EnvGuard::set("ECO_LOG_COLORED", "false");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.storage.path.as_str(), eq("override.json"));
    assert_that!(
        config.auth.admin_email.as_str(),
        eq("prefeitura@recife.gov.br")
    );
    assert_that!(config.scanner.success_rate, eq(1.0));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_config_dir_env_when_storage_path_then_joins_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.storage_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join("users.json")));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_is_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("cfg");
    let _guard = EnvGuard::set("ECO_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.exists(), eq(true));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[scanner\ndelay_ms = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result.is_err(), eq(true));
}
