use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Cache
// =========================================================================

#[test]
#[serial]
fn given_empty_namespace_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _ns = EnvGuard::set("MX_CACHE_NAMESPACE", "");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_namespace_with_path_separator_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _ns = EnvGuard::set("MX_CACHE_NAMESPACE", "../user");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_namespace_with_dash_and_underscore_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _ns = EnvGuard::set("MX_CACHE_NAMESPACE", "work_account-2");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}
