//! Notify client library
//!
//! Builds a small notification (source, level, title, message, optional tag),
//! encodes it as a compact JSON document and writes it over a single TCP
//! connection to a notified server. Optionally hands the send to a detached
//! background process.

pub mod cli;
pub mod config;
pub mod encoder;
pub mod errors;
pub mod notification;
pub mod process;
pub mod transport;

// Re-export commonly used types for convenience
pub use config::{Config, ConfigManager};
pub use errors::{AppError, AppResult};
pub use notification::{validate, Level, Notification, NotificationDraft};
pub use transport::{Target, TcpTransport, Transport};
