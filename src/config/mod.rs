//! Configuration: TOML file with per-field defaults, validated on load.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig, PAGE_SIZES};
