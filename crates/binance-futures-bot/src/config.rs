/*
[INPUT]:  Optional config file, FUTURES_BOT_* environment variables
[OUTPUT]: BotConfig with endpoint, timeout and logging settings
[POS]:    Configuration layer - runtime settings
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use binance_futures_adapter::ClientConfig;
use binance_futures_adapter::http::client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

use crate::logging::LogSettings;

/// Looked up in the working directory as .yaml, .toml or .json
pub const DEFAULT_CONFIG_NAME: &str = "futures-bot";
pub const ENV_PREFIX: &str = "FUTURES_BOT";

/// Runtime settings for the order bot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BotConfig {
    /// REST endpoint, testnet unless overridden
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Directory for the rolling debug log
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Console filter directive, e.g. "info" or "binance_futures_adapter=debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            log_dir: default_log_dir(),
            log_level: default_log_level(),
        }
    }
}

impl BotConfig {
    /// Defaults, then the config file, then the environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("build configuration")?;

        settings
            .try_deserialize()
            .context("parse configuration")
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    /// Logging settings; `console_override` comes from `--log-level`
    pub fn log_settings(&self, console_override: Option<&str>) -> LogSettings {
        LogSettings {
            console_level: console_override.unwrap_or(&self.log_level).to_string(),
            log_dir: self.log_dir.clone(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_level() -> String {
    "info".to_string()
}
