//! CLI Context for shared configuration and logging setup

use std::path::PathBuf;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::ConfigManager;
use crate::errors::{AppResult, ErrorContextExt};

/// CLI execution context containing shared dependencies and configuration
#[derive(Clone)]
pub struct CliContext {
    pub verbose: bool,
    pub detached: bool,
    pub config_manager: Arc<ConfigManager>,
}

impl CliContext {
    pub fn new(config_path: Option<PathBuf>, verbose: bool, detached: bool) -> AppResult<Self> {
        let config_manager = Arc::new(ConfigManager::new(config_path)?);

        Ok(Self {
            verbose,
            detached,
            config_manager,
        })
    }

    fn log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.config_manager.config().log.level
        }
    }

    fn env_filter(&self) -> tracing_subscriber::EnvFilter {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(
            self.log_level()
                .parse()
                .unwrap_or_else(|_| tracing::Level::WARN.into()),
        )
    }

    /// Initialize logging
    ///
    /// Interactive runs log to stderr. The detached child has no terminal and
    /// logs to the configured file, or nowhere. The returned guard must be
    /// held until exit so buffered file output is flushed.
    pub fn init_logging(&self) -> AppResult<Option<WorkerGuard>> {
        if !self.detached {
            // try_init: a subscriber may already exist when embedded in tests
            let _ = tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(self.env_filter())
                .try_init();

            if self.verbose {
                tracing::debug!("Verbose logging enabled");
                tracing::debug!("Config file: {:?}", self.config_manager.config_path());
            }
            return Ok(None);
        }

        let Some(log_path) = self.config_manager.config().log.path.clone() else {
            return Ok(None);
        };

        let directory = log_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        std::fs::create_dir_all(&directory)
            .in_file_operation(&directory, "create log directory")?;

        let file_name = log_path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "notify-client.log".into());
        let file_appender = tracing_appender::rolling::never(&directory, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let _ = tracing_subscriber::fmt()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_env_filter(self.env_filter())
            .try_init();

        tracing::debug!("Background sender logging to {:?}", log_path);
        Ok(Some(guard))
    }
}
