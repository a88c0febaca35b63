use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use staffdesk::api::ApiClient;
use staffdesk::config::Config;

/// Terminal client for the staffing back office.
#[derive(Parser, Debug)]
#[command(name = "staffdesk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/staffdesk/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// API base URL, overriding `api.base_url`
    #[arg(long)]
    base_url: Option<String>,

    /// Records per page: 5, 10, 20, 50 or 100
    #[arg(long)]
    page_size: Option<u32>,

    /// Tab to open on startup: clients, vendors, jobs, resources, roles
    #[arg(long)]
    screen: Option<String>,

    /// Log file, overriding `logging.file`
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.ui.page_size = page_size;
        }
        if let Some(screen) = &self.screen {
            config.ui.start_screen = screen.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let log_path = staffdesk::logging::init(&config.logging).context("Failed to set up logging")?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path.display(),
        log = %log_path.display(),
        base_url = %config.api.base_url,
        "Starting staffdesk"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("staffdesk-io")
        .build()
        .context("Failed to start async runtime")?;
    let client = ApiClient::new(&config.api)?;

    let result = staffdesk::ui::run(&config, client, runtime.handle().clone());
    runtime.shutdown_timeout(Duration::from_secs(1));
    result.context("Terminal UI failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "staffdesk",
            "--base-url",
            "https://staffing.example.com/api/v1/",
            "--page-size",
            "20",
            "--screen",
            "vendors",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.api.base_url, "https://staffing.example.com/api/v1/");
        assert_eq!(config.ui.page_size, 20);
        assert_eq!(config.ui.start_screen, "vendors");
        assert!(config.logging.file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn no_flags_keep_defaults() {
        let cli = Cli::try_parse_from(["staffdesk"]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_page_size_fails_validation() {
        let cli = Cli::try_parse_from(["staffdesk", "--page-size", "7"]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert!(config.validate().is_err());
    }
}
