//! Centralized error handling module
//!
//! Library code returns [`AppResult`]; the binary turns the final error into
//! a diagnostic line and an exit status.

pub mod context;
pub mod types;

pub use context::ErrorContextExt;
pub use types::{AppError, AppResult};

/// Convert from anyhow::Error to AppError for call sites that build context with anyhow
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Other {
            message: format!("{:#}", err),
            source: None,
        }
    }
}
