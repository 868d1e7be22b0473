//! Background sending
//!
//! `--fork` re-runs the current executable with the resolved arguments and a
//! marker variable, standard streams detached, then lets the caller exit.
//! The child starts a new session and performs the send on its own.

use anyhow::Context;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::notification::NotificationDraft;

/// Marker set in the environment of the background child
pub const DETACHED_ENV: &str = "NOTIFY_CLIENT_DETACHED";

/// Whether this process is the background half of a `--fork` invocation
pub fn is_detached_child() -> bool {
    std::env::var_os(DETACHED_ENV).is_some()
}

/// Command line that reproduces `draft` in a fresh process
///
/// Values are passed in `--flag=value` form so that a message starting with
/// a dash is not mistaken for a flag.
pub fn child_args(draft: &NotificationDraft, config_path: Option<&Path>, verbose: bool) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();

    if let Some(host) = &draft.host {
        args.push(format!("--host={host}").into());
    }
    args.push(format!("--port={}", draft.port).into());
    args.push(format!("--source={}", draft.source).into());
    args.push(format!("--level={}", draft.level).into());
    args.push(format!("--title={}", draft.title).into());
    if let Some(message) = &draft.message {
        args.push(format!("--message={message}").into());
    }
    if let Some(tag) = &draft.tag {
        args.push(format!("--tag={tag}").into());
    }
    if let Some(path) = config_path {
        let mut arg = OsString::from("--config=");
        arg.push(path.as_os_str());
        args.push(arg);
    }
    if verbose {
        args.push("--verbose".into());
    }

    args
}

/// Spawn the background sender and return its PID
pub fn spawn_detached(args: &[OsString]) -> AppResult<u32> {
    let current_exe = std::env::current_exe().context("Failed to get current executable path")?;
    debug!("Spawning {} {:?}", current_exe.display(), args);

    let child = Command::new(&current_exe)
        .args(args)
        .env(DETACHED_ENV, "1")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| AppError::detach_with_source("cannot spawn background sender", e))?;

    info!("Background sender started with PID {}", child.id());
    Ok(child.id())
}

/// Leave the invoking terminal's session (Unix only)
pub fn enter_new_session() -> AppResult<()> {
    #[cfg(unix)]
    {
        // SAFETY: setsid has no memory-safety preconditions
        if unsafe { libc::setsid() } == -1 {
            return Err(AppError::detach_with_source(
                "Failed to create new session",
                std::io::Error::last_os_error(),
            ));
        }
    }

    Ok(())
}
