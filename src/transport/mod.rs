//! Payload delivery
//!
//! [`TcpTransport`] is the real network path; [`StdoutTransport`] backs
//! `--dry-run`. Both sit behind the [`Transport`] trait so the dispatcher does
//! not care which one it drives.

pub mod stdout;
pub mod tcp;
pub mod traits;

pub use stdout::StdoutTransport;
pub use tcp::TcpTransport;
pub use traits::{Target, Transport};
