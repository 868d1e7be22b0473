//! Default notification source
//!
//! When no source is given, the notification is attributed to whatever
//! invoked the client: the first word of the parent process's command line.

use sysinfo::{Pid, Process, System};
use tracing::{debug, warn};

use crate::notification::FALLBACK_SOURCE;

/// Command name of the calling process, if the OS will tell us
pub fn parent_command_name() -> Option<String> {
    let current = sysinfo::get_current_pid().ok()?;
    let sys = System::new_all();
    let parent_pid = sys.process(current)?.parent()?;

    command_name(&sys, parent_pid)
}

fn command_name(sys: &System, pid: Pid) -> Option<String> {
    let process = sys.process(pid)?;
    first_arg(process).or_else(|| {
        let name = process.name().to_string_lossy().to_string();
        (!name.is_empty()).then_some(name)
    })
}

fn first_arg(process: &Process) -> Option<String> {
    process
        .cmd()
        .first()
        .map(|arg| arg.to_string_lossy().to_string())
        .filter(|arg| !arg.is_empty())
}

/// Pick the explicit source or fall back to the parent process, then to `"default"`
pub fn resolve_source(explicit: Option<String>) -> String {
    if let Some(source) = explicit {
        return source;
    }

    match parent_command_name() {
        Some(name) => {
            debug!("Using parent process '{}' as source", name);
            name
        }
        None => {
            warn!("Cannot read parent process command line, using '{}'", FALLBACK_SOURCE);
            FALLBACK_SOURCE.to_string()
        }
    }
}
