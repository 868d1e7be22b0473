//! Notification record and its validation
//!
//! Argument resolution fills a [`NotificationDraft`]; [`validate`] checks the
//! level and the required fields and returns a [`Notification`].

pub mod types;
pub mod validator;

pub use types::{Level, Notification, NotificationDraft, DEFAULT_PORT, FALLBACK_SOURCE};
pub use validator::validate;
