//! Config file loading and validation.

mod common;

use common::temp_config;
use staffdesk::config::{Config, ConfigError};
use std::path::PathBuf;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api/v1/");
    assert_eq!(config.ui.page_size, 10);
    assert_eq!(config.ui.toast_timeout_ms, 3000);
    assert_eq!(config.ui.start_screen, "clients");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn partial_file_fills_remaining_defaults() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "https://backoffice.example.com/api/v1/"
token = "abc"

[ui]
page_size = 20
start_screen = "jobs"

[logging]
level = "debug"
file = "/tmp/staffdesk-test.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://backoffice.example.com/api/v1/");
    assert_eq!(config.api.resolve_token().as_deref(), Some("abc"));
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.ui.page_size, 20);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.start_screen, "jobs");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file_path(),
        PathBuf::from("/tmp/staffdesk-test.log")
    );
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = temp_config("[api\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn unsupported_page_size_is_rejected() {
    let (_dir, path) = temp_config("[ui]\npage_size = 7\n");
    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => assert!(message.contains("page_size")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_http_base_url_is_rejected() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"ftp://files.example.com\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn unknown_start_screen_is_rejected() {
    let (_dir, path) = temp_config("[ui]\nstart_screen = \"payroll\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("payroll"));
}

#[test]
fn zero_tick_rate_is_rejected() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn token_falls_back_to_environment_variable() {
    let mut config = Config::default();
    config.api.token_env_var = "STAFFDESK_CONFIG_TEST_TOKEN".to_string();
    assert_eq!(config.api.resolve_token(), None);

    // Only this test touches this variable.
    std::env::set_var("STAFFDESK_CONFIG_TEST_TOKEN", "from-env");
    assert_eq!(config.api.resolve_token().as_deref(), Some("from-env"));

    config.api.token = Some("from-file".to_string());
    assert_eq!(config.api.resolve_token().as_deref(), Some("from-file"));
}
