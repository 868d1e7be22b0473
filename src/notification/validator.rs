//! Notification validation
//!
//! Checks run in a fixed order (host, message, level) and stop at the
//! first failure.

use super::types::{Level, Notification, NotificationDraft};
use crate::errors::{AppError, AppResult};
use tracing::debug;

/// Validate a draft and produce the immutable notification it describes
pub fn validate(draft: NotificationDraft) -> AppResult<Notification> {
    let host = non_empty(draft.host).ok_or_else(|| AppError::missing("host"))?;
    let message = non_empty(draft.message).ok_or_else(|| AppError::missing("message"))?;
    let level: Level = draft.level.parse()?;

    // An empty tag is treated the same as no tag at all
    let tag = non_empty(draft.tag);

    debug!(
        host = %host,
        port = draft.port,
        level = %level,
        source = %draft.source,
        "notification validated"
    );

    Ok(Notification::from_validated(
        host,
        draft.port,
        draft.source,
        level,
        draft.title,
        message,
        tag,
    ))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
