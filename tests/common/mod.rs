//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use staffdesk::api::ApiClient;
use staffdesk::config::ApiConfig;
use staffdesk::lifecycle::{BusyTracker, LifecycleContext, ToastQueue};
use staffdesk::ui::events::AppEvent;
use staffdesk::ui::screens::ScreenContext;
use tempfile::TempDir;

/// Client pointed at `base_url`, authenticating with `token` when given.
pub fn api_client(base_url: &str, token: Option<&str>) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        token: token.map(str::to_string),
        token_env_var: "STAFFDESK_TEST_UNSET_TOKEN".to_string(),
        ..ApiConfig::default()
    };
    ApiClient::new(&config).expect("client should build")
}

/// Screen context on the current runtime, plus the receiving end of its event channel.
pub fn screen_context(client: ApiClient) -> (ScreenContext, Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let ctx = ScreenContext {
        client,
        lifecycle: LifecycleContext::new(BusyTracker::new(), ToastQueue::new()),
        runtime: tokio::runtime::Handle::current(),
        events: tx,
    };
    (ctx, rx)
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
