//! Interaction with the surrounding processes: who called us, and how to
//! hand the send off to a background child.

pub mod detach;
pub mod parent;

pub use detach::{child_args, enter_new_session, is_detached_child, spawn_detached, DETACHED_ENV};
pub use parent::{parent_command_name, resolve_source};
