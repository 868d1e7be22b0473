//! Type definitions for notifications
//!
//! A [`NotificationDraft`] is what argument resolution produces: every field
//! as the user (or a default) supplied it, unchecked. Validation turns it
//! into a [`Notification`], which the encoder and transport consume.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Port used when neither the command line nor the config names one
pub const DEFAULT_PORT: u16 = 5050;

/// Source used when the parent process cannot be inspected
pub const FALLBACK_SOURCE: &str = "default";

/// Importance classification of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    #[default]
    Normal,
    Critical,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Low, Level::Normal, Level::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Normal => "normal",
            Level::Critical => "critical",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = AppError;

    /// Exact, case-sensitive match against the three level names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| AppError::InvalidLevel {
                level: s.to_string(),
            })
    }
}

/// Unvalidated notification fields, after defaults and overrides are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub host: Option<String>,
    pub port: u16,
    pub source: String,
    pub level: String,
    pub title: String,
    pub message: Option<String>,
    pub tag: Option<String>,
}

impl Default for NotificationDraft {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_PORT,
            source: FALLBACK_SOURCE.to_string(),
            level: Level::default().to_string(),
            title: String::new(),
            message: None,
            tag: None,
        }
    }
}

/// A validated notification, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    host: String,
    port: u16,
    source: String,
    level: Level,
    title: String,
    message: String,
    tag: Option<String>,
}

impl Notification {
    /// Assemble a notification from parts that already passed validation
    pub(crate) fn from_validated(
        host: String,
        port: u16,
        source: String,
        level: Level,
        title: String,
        message: String,
        tag: Option<String>,
    ) -> Self {
        Self {
            host,
            port,
            source,
            level,
            title,
            message,
            tag,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The tag, if one was given and is non-empty
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}
