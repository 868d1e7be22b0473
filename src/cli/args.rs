//! Argument resolution
//!
//! Merges the parsed command line (which already folds in the environment)
//! with the config file and built-in defaults into a [`NotificationDraft`].

use super::Cli;
use crate::config::Config;
use crate::notification::{NotificationDraft, DEFAULT_PORT};
use crate::process::resolve_source;

/// Handles argument merging and default resolution
pub struct ArgProcessor<'a> {
    config: &'a Config,
}

impl<'a> ArgProcessor<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Build a draft, inferring the source from the parent process when unset
    pub fn resolve(&self, cli: &Cli) -> NotificationDraft {
        self.resolve_with(cli, resolve_source)
    }

    /// Build a draft using `infer_source` for the source fallback
    pub fn resolve_with<F>(&self, cli: &Cli, infer_source: F) -> NotificationDraft
    where
        F: FnOnce(Option<String>) -> String,
    {
        let defaults = &self.config.notification;
        let server = &self.config.server;
        let fallback = NotificationDraft::default();

        NotificationDraft {
            host: cli.host.clone().or_else(|| server.host.clone()),
            port: cli.port.or(server.port).unwrap_or(DEFAULT_PORT),
            source: infer_source(cli.source.clone().or_else(|| defaults.source.clone())),
            level: cli
                .level
                .clone()
                .or_else(|| defaults.level.clone())
                .unwrap_or(fallback.level),
            title: cli
                .title
                .clone()
                .or_else(|| defaults.title.clone())
                .unwrap_or(fallback.title),
            message: cli.message.clone(),
            tag: cli.tag.clone().or_else(|| defaults.tag.clone()),
        }
    }
}
