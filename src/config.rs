use crate::errors::{AppError, AppResult, ErrorContextExt};
use directories::BaseDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Optional defaults for the notify client
///
/// Every key may be omitted; the command line and environment override
/// whatever is set here.
///
/// ```toml
/// [server]
/// host = "notify.lan"
/// port = 5050
/// connect_timeout_secs = 5
///
/// [notification]
/// level = "normal"
/// tag = "workstation"
///
/// [log]
/// level = "info"
/// path = "/var/log/notify-client.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub notification: NotificationDefaults,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub connect_timeout_secs: Option<u64>,
}

impl ServerConfig {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationDefaults {
    pub source: Option<String>,
    pub level: Option<String>,
    pub title: Option<String>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Log file used by the detached background sender
    pub path: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            path: None,
        }
    }
}

/// Loads the client configuration
///
/// # Lookup
///
/// 1. An explicit path (`--config` or `NOTIFY_CLIENT_CONFIG`); it must exist.
/// 2. `<config dir>/notify-client/config.toml`; silently skipped when absent.
///
/// The file is only ever read.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: Option<PathBuf>,
    config: Config,
}

impl ConfigManager {
    pub fn new(explicit_path: Option<PathBuf>) -> AppResult<Self> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(AppError::ConfigNotFound { path });
            }
            let config = Self::load(&path)?;
            return Ok(Self {
                config_path: Some(path),
                config,
            });
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => {
                let config = Self::load(&path)?;
                Ok(Self {
                    config_path: Some(path),
                    config,
                })
            }
            _ => Ok(Self::from_config(Config::default())),
        }
    }

    /// Wrap an already built configuration
    pub fn from_config(config: Config) -> Self {
        Self {
            config_path: None,
            config,
        }
    }

    pub fn default_config_path() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.config_dir().join("notify-client").join("config.toml"))
    }

    fn load(path: &Path) -> AppResult<Config> {
        let content = fs::read_to_string(path).in_file_operation(path, "read config file")?;
        Ok(toml::from_str(&content)?)
    }

    /// The file the configuration came from, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
