use std::path::Path;

use portal_client::config::{ConfigError, Settings, ENV_API_BASE_URL, ENV_HOST, ENV_PROTOCOL};

fn no_env(_name: &str) -> Option<String> {
    None
}

/// Test that Settings::default() produces the expected values.
#[test]
fn test_settings_default_values() {
    let settings = Settings::default();

    assert_eq!(settings.http.request_timeout_seconds, 30);
    assert_eq!(settings.http.connect_timeout_seconds, 5);
    assert!(settings.api.base_url.is_none());
    assert!(settings.api.host.is_none());
    assert!(settings.api.protocol.is_none());
}

/// Test that Settings::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Settings::config_path();
    assert!(path.ends_with("portal-client/config.toml"));
}

/// Test that file values are used when no environment overrides exist.
#[test]
fn test_file_values_used_without_env() {
    let content = r#"
[api]
host = "portal.example.org"
protocol = "http"

[http]
request_timeout_seconds = 10
"#;

    let settings = Settings::from_sources(Some(content), Path::new("test.toml"), no_env).unwrap();

    assert_eq!(settings.api.host.as_deref(), Some("portal.example.org"));
    assert_eq!(settings.api.protocol.as_deref(), Some("http"));
    assert_eq!(settings.http.request_timeout_seconds, 10);
    // Untouched sections keep their defaults.
    assert_eq!(settings.http.connect_timeout_seconds, 5);
}

/// Test that environment variables override file values.
#[test]
fn test_env_overrides_file() {
    let content = r#"
[api]
host = "from-file.example.org"
protocol = "http"
"#;

    let settings = Settings::from_sources(Some(content), Path::new("test.toml"), |name| {
        if name == ENV_HOST {
            Some("from-env.example.org".to_string())
        } else {
            None
        }
    })
    .unwrap();

    assert_eq!(settings.api.host.as_deref(), Some("from-env.example.org"));
    // Values the environment does not override survive from the file.
    assert_eq!(settings.api.protocol.as_deref(), Some("http"));
}

/// Test that an environment base URL wins over everything in the file.
#[test]
fn test_env_base_url_wins() {
    let content = r#"
[api]
host = "from-file.example.org"
"#;

    let settings = Settings::from_sources(Some(content), Path::new("test.toml"), |name| {
        if name == ENV_API_BASE_URL {
            Some("https://override.example.org/api".to_string())
        } else {
            None
        }
    })
    .unwrap();

    let url = settings.api_base_url().unwrap();
    assert_eq!(url.as_str(), "https://override.example.org/api");
}

/// Test that host and protocol compose the base URL.
#[test]
fn test_host_and_protocol_compose_base_url() {
    let settings = Settings::from_sources(None, Path::new("unused.toml"), |name| match name {
        n if n == ENV_HOST => Some("portal.example.org".to_string()),
        n if n == ENV_PROTOCOL => Some("http".to_string()),
        _ => None,
    })
    .unwrap();

    let url = settings.api_base_url().unwrap();
    assert_eq!(url.as_str(), "http://portal.example.org/");
}

/// Test that a bare host defaults to https.
#[test]
fn test_host_only_defaults_to_https() {
    let content = r#"
[api]
host = "portal.example.org"
"#;

    let settings = Settings::from_sources(Some(content), Path::new("test.toml"), no_env).unwrap();

    let url = settings.api_base_url().unwrap();
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("portal.example.org"));
}

/// Test that an explicit base_url wins over host/protocol.
#[test]
fn test_explicit_base_url_wins_over_host() {
    let content = r#"
[api]
base_url = "https://explicit.example.org/api"
host = "ignored.example.org"
protocol = "http"
"#;

    let settings = Settings::from_sources(Some(content), Path::new("test.toml"), no_env).unwrap();

    let url = settings.api_base_url().unwrap();
    assert_eq!(url.host_str(), Some("explicit.example.org"));
    assert_eq!(url.scheme(), "https");
}

/// Test validation fails when neither a base URL nor a host is configured.
#[test]
fn test_validation_fails_without_any_source() {
    let result = Settings::from_sources(None, Path::new("unused.toml"), no_env);

    match result.unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("No API base URL"), "got: {message}");
        }
        other => panic!("Expected ValidationError, got: {other:?}"),
    }
}

/// Test that a protocol alone is not enough to compose a base URL.
#[test]
fn test_protocol_alone_fails_validation() {
    let content = r#"
[api]
protocol = "https"
"#;

    let result = Settings::from_sources(Some(content), Path::new("test.toml"), no_env);
    assert!(matches!(
        result,
        Err(ConfigError::ValidationError { .. })
    ));
}

/// Test that a malformed base URL is reported as such.
#[test]
fn test_malformed_base_url_is_base_url_error() {
    let settings = Settings {
        api: portal_client::config::ApiSettings {
            base_url: Some("http://".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    match settings.api_base_url().unwrap_err() {
        ConfigError::BaseUrlError { value, .. } => {
            assert_eq!(value, "http://");
        }
        other => panic!("Expected BaseUrlError, got: {other:?}"),
    }
}

/// Test that non-http schemes are rejected.
#[test]
fn test_non_http_scheme_rejected() {
    let content = r#"
[api]
base_url = "ftp://portal.example.org"
"#;

    let result = Settings::from_sources(Some(content), Path::new("test.toml"), no_env);

    match result.unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("http or https"), "got: {message}");
        }
        other => panic!("Expected ValidationError, got: {other:?}"),
    }
}

/// Test that invalid TOML produces a parse error carrying the path.
#[test]
fn test_parse_invalid_toml() {
    let result = Settings::from_sources(
        Some("this is not valid toml [[["),
        Path::new("broken.toml"),
        no_env,
    );

    match result.unwrap_err() {
        ConfigError::ParseError { path, .. } => {
            assert!(path.ends_with("broken.toml"));
        }
        other => panic!("Expected ParseError, got: {other:?}"),
    }
}

/// Test the real user flow: write TOML, then load and validate it.
#[test]
fn test_load_from_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[api]
base_url = "https://portal.example.org"

[http]
request_timeout_seconds = 12
connect_timeout_seconds = 3
"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings.http.request_timeout_seconds, 12);
    assert_eq!(settings.http.connect_timeout_seconds, 3);
    assert!(settings.api_base_url().is_ok());
}

/// Test that an explicitly given file must exist.
#[test]
fn test_load_from_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    match Settings::load_from(&path).unwrap_err() {
        ConfigError::ReadError { path: err_path, .. } => {
            assert_eq!(err_path, path);
        }
        other => panic!("Expected ReadError, got: {other:?}"),
    }
}

/// Test that an empty file still fails validation (no URL anywhere).
#[test]
fn test_empty_file_fails_validation() {
    let result = Settings::from_sources(Some(""), Path::new("empty.toml"), no_env);

    assert!(matches!(
        result,
        Err(ConfigError::ValidationError { .. })
    ));
}
