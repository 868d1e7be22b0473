//! Error context enhancement utilities
//!
//! Attaches the failing operation to foreign error types while converting
//! them into [`AppError`].

use super::types::AppError;
use std::path::PathBuf;

/// Extension trait for adding context to error types
pub trait ErrorContextExt<T> {
    /// Add operation context to the error
    fn with_context(self, operation: impl Into<String>) -> Result<T, AppError>;

    /// Add operation and file context
    fn in_file_operation(
        self,
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
    ) -> Result<T, AppError>;
}

impl<T, E> ErrorContextExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context(self, operation: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|e| {
            let operation = operation.into();
            AppError::Other {
                message: format!("{}: {}", operation, e),
                source: Some(Box::new(e)),
            }
        })
    }

    fn in_file_operation(
        self,
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
    ) -> Result<T, AppError> {
        self.map_err(|e| AppError::Io {
            path: path.into(),
            operation: operation.into(),
            reason: e.to_string(),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_prefixes_message() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "boom",
        ));

        let err = result.with_context("writing payload").unwrap_err();
        assert_eq!(err.to_string(), "writing payload: boom");
    }

    #[test]
    fn test_in_file_operation_records_path() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        match result.in_file_operation("/tmp/notify.toml", "read config file") {
            Err(AppError::Io { path, operation, .. }) => {
                assert_eq!(path, PathBuf::from("/tmp/notify.toml"));
                assert_eq!(operation, "read config file");
            }
            other => panic!("Expected AppError::Io, got {:?}", other),
        }
    }

    #[test]
    fn test_in_file_operation_message_keeps_os_description() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "Permission denied (os error 13)",
        ));

        let err = result
            .in_file_operation("/etc/notify-client/config.toml", "read config file")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "I/O error for '/etc/notify-client/config.toml': read config file: Permission denied (os error 13)"
        );
    }
}
