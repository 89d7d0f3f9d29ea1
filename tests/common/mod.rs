//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_portal;

use portal_client::config::Settings;

/// Settings pointing at a given backend, with no file or env involved.
pub fn test_settings(base_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.api.base_url = Some(base_url.to_string());
    settings
}
