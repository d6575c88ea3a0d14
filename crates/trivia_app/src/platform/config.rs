use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trivia_gateway::GatewaySettings;
use trivia_logging::trivia_info;

use super::cli::Args;
use super::logging::LogDestination;

pub const DEFAULT_CONFIG_FILENAME: &str = "trivia.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config in {path:?}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

/// Contents of `trivia.ron`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: Option<u64>,
    pub log: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = GatewaySettings::default();
        Self {
            base_url: settings.base_url,
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            request_timeout_secs: None,
            log: LogDestination::default(),
        }
    }
}

impl AppConfig {
    /// Loads the config named on the command line, or `./trivia.ron` when it
    /// exists, then applies command-line overrides.
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => load_config(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILENAME);
                if path.exists() {
                    load_config(path)?
                } else {
                    Self::default()
                }
            }
        };
        if let Some(base_url) = &args.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(log) = args.log {
            config.log = log;
        }
        Ok(config)
    }

    pub fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

pub(crate) fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    trivia_info!("Loaded config from {:?}", path);
    Ok(config)
}
