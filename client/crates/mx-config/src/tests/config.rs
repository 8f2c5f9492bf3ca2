use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
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
    assert_that!(config.api.base_url.as_str(), eq(crate::DEFAULT_BASE_URL));
    assert_that!(config.api.timeout_secs, eq(crate::DEFAULT_TIMEOUT_SECS));
    assert_that!(
        config.cache.namespace.as_str(),
        eq(crate::DEFAULT_CACHE_NAMESPACE)
    );
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
fn given_missing_config_dir_when_load_then_dir_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested/dir");
    let _dir = EnvGuard::set("MX_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [api]
            base_url = "http://metrics.local:9000"
            timeout_secs = 10

            [cache]
            namespace = "staging"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.api.base_url.as_str(),
        eq("http://metrics.local:9000")
    );
    assert_that!(config.api.timeout_secs, eq(10));
    assert_that!(config.cache.namespace.as_str(), eq("staging"));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[api]\ntimeout_secs = 10").unwrap();
    let _timeout = EnvGuard::set("MX_API_TIMEOUT_SECS", "45");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.timeout_secs, eq(45));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("MX_API_BASE_URL", "https://metrics.example.com");
    let _ns = EnvGuard::set("MX_CACHE_NAMESPACE", "work");
    let _colored = EnvGuard::set("MX_LOG_COLORED", "false");
    let _file = EnvGuard::set("MX_LOG_FILE", "/tmp/mx.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.api.base_url.as_str(),
        eq("https://metrics.example.com")
    );
    assert_that!(config.cache.namespace.as_str(), eq("work"));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), eq(Some("/tmp/mx.log")));
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_keeps_default() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("MX_API_TIMEOUT_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.timeout_secs, eq(crate::DEFAULT_TIMEOUT_SECS));
}

#[test]
#[serial]
fn given_namespace_when_cache_paths_then_live_in_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.identity_cache_path().unwrap(),
        eq(&temp.path().join("user.json"))
    );
    assert_that!(
        config.cookie_path().unwrap(),
        eq(&temp.path().join("user.cookies"))
    );
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "this is not valid toml {{{{",
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_blank_log_file_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("MX_LOG_FILE", "  ");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
