use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Page sizes the list screens cycle through.
pub const PAGE_SIZES: [u32; 5] = [5, 10, 20, 50, 100];

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the back-office REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL including the API prefix (e.g., "https://staffing.example.com/api/v1/").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token. Takes precedence over `token_env_var`.
    #[serde(default)]
    pub token: Option<String>,
    /// Environment variable consulted when `token` is not set.
    #[serde(default = "default_token_env_var")]
    pub token_env_var: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Terminal UI behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Rows requested per page (one of 5, 10, 20, 50, 100).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// How long toasts stay visible, in milliseconds (default: 3000).
    #[serde(default = "default_toast_timeout_ms")]
    pub toast_timeout_ms: u64,
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Tab shown on startup: clients, vendors, jobs, resources, roles.
    #[serde(default = "default_start_screen")]
    pub start_screen: String,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to `<data dir>/staffdesk/staffdesk.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api/v1/".to_string()
}

fn default_token_env_var() -> String {
    "STAFFDESK_API_TOKEN".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> u32 {
    10
}

fn default_toast_timeout_ms() -> u64 {
    3000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_start_screen() -> String {
    "clients".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ApiConfig {
    /// Token from config, else from the configured environment variable.
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| std::env::var(&self.token_env_var).ok())
            .filter(|t| !t.is_empty())
    }
}

impl LoggingConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("staffdesk")
                .join("staffdesk.log")
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            token_env_var: default_token_env_var(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            toast_timeout_ms: default_toast_timeout_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            start_screen: default_start_screen(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
