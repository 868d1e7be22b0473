//! Error types for the notify client
//!
//! Every failure the client can hit is fatal to the invocation, so the
//! variants here exist mainly to pick a diagnostic and an exit status.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
///
/// Organized by the stage of the send pipeline that produced it.
#[derive(Error, Debug)]
pub enum AppError {
    // Usage errors
    #[error("{message}")]
    Usage { message: String },

    // Validation errors
    #[error("invalid level '{level}' (expected one of: low, normal, critical)")]
    InvalidLevel { level: String },

    #[error("missing {argument}")]
    MissingArgument { argument: String },

    // Encoding errors
    #[error("JSON serialization error: {context}")]
    JsonSerialization {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("JSON deserialization error: {context}")]
    JsonDeserialization {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("TOML parsing error: {context}")]
    TomlParsing {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Network errors
    #[error("cannot resolve '{host}': {reason}")]
    Resolve {
        host: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("connect to {address} failed: {reason}")]
    Connect {
        address: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("send to {address} failed: {reason}")]
    Send {
        address: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Process errors
    #[error("Failed to detach: {reason}")]
    Detach {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // I/O errors
    #[error("I/O error for '{path}': {operation}: {reason}")]
    Io {
        path: PathBuf,
        operation: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{message}")]
    Other {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new Usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a new MissingArgument error
    pub fn missing(argument: impl Into<String>) -> Self {
        Self::MissingArgument {
            argument: argument.into(),
        }
    }

    /// Create a new Resolve error carrying the resolver's error
    pub fn resolve_with_source(host: impl Into<String>, source: std::io::Error) -> Self {
        Self::Resolve {
            host: host.into(),
            reason: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Connect error carrying the OS error
    pub fn connect_with_source(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Connect {
            address: address.into(),
            reason: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Send error carrying the OS error
    pub fn send_with_source(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Send {
            address: address.into(),
            reason: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Detach error with source
    pub fn detach_with_source(
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Detach {
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Usage { .. } => "usage",
            Self::InvalidLevel { .. } | Self::MissingArgument { .. } => "validation",
            Self::JsonSerialization { .. } | Self::JsonDeserialization { .. } => "encoding",
            Self::ConfigNotFound { .. } | Self::TomlParsing { .. } => "config",
            Self::Resolve { .. } | Self::Connect { .. } | Self::Send { .. } => "network",
            Self::Detach { .. } => "process",
            Self::Io { .. } => "io",
            Self::Other { .. } => "internal",
        }
    }

    /// Process exit status for this error, following sysexits.h
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            "usage" => 64,
            "validation" => 65,
            "network" => 69,
            "encoding" => 70,
            "config" => 78,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let operation = match err.kind() {
            std::io::ErrorKind::NotFound => "file not found",
            std::io::ErrorKind::PermissionDenied => "permission denied",
            _ => "I/O operation",
        }
        .to_string();

        Self::Io {
            path: PathBuf::from("unknown"),
            operation,
            reason: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() {
            Self::JsonDeserialization {
                context: format!(
                    "JSON syntax error at line {} column {}",
                    err.line(),
                    err.column()
                ),
                source: Some(Box::new(err)),
            }
        } else if err.is_data() {
            Self::JsonDeserialization {
                context: "JSON data error".to_string(),
                source: Some(Box::new(err)),
            }
        } else if err.is_eof() {
            Self::JsonDeserialization {
                context: "Unexpected end of JSON input".to_string(),
                source: Some(Box::new(err)),
            }
        } else {
            Self::JsonSerialization {
                context: "JSON serialization error".to_string(),
                source: Some(Box::new(err)),
            }
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::TomlParsing {
            context: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
