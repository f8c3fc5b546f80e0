use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analytics::DurationWindow;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub charts: ChartsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Root directory of the JSON analytics exports
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartsConfig {
    /// Window used when none is requested explicitly
    #[serde(default)]
    pub default_window: DurationWindow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "LoggingConfig::default_filter")]
    pub filter: String,
}

impl LoggingConfig {
    fn default_filter() -> String {
        "info".to_string()
    }

    /// Reads only the logging settings
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            filter: std::env::var("CHARTS_LOG").unwrap_or_else(|_| Self::default_filter()),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let data_dir = std::env::var("CHARTS_DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        let default_window = match std::env::var("CHARTS_DEFAULT_DAYS") {
            Ok(raw) => parse_default_window(&raw),
            Err(_) => DurationWindow::default(),
        };

        let config = Config {
            data: DataConfig {
                dir: PathBuf::from(data_dir),
            },
            charts: ChartsConfig { default_window },
            logging: LoggingConfig::from_env(),
        };

        config.validate().context("invalid chart configuration")?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.data.dir.as_os_str().is_empty() {
            anyhow::bail!("CHARTS_DATA_DIR must not be empty");
        }
        Ok(())
    }
}

fn parse_default_window(raw: &str) -> DurationWindow {
    match raw.parse::<DurationWindow>() {
        Ok(window) => window,
        Err(e) => {
            tracing::warn!(
                "Invalid CHARTS_DEFAULT_DAYS '{raw}' ({e}), falling back to 7. Supported values: 1, 7, 30, 365"
            );
            DurationWindow::default()
        }
    }
}
