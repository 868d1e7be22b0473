//! Command line argument definitions
//!
//! `-h` belongs to `--host`, so clap's automatic help flag is replaced by a
//! long-only `--help`.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "notify-client")]
#[command(about = "Send a notification to a notified server")]
#[command(version)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Notified server host
    #[arg(short = 'h', long, env = "NOTIFY_HOST")]
    pub host: Option<String>,

    /// Notified server port (default 5050)
    #[arg(short = 'p', long, env = "NOTIFY_PORT")]
    pub port: Option<u16>,

    /// Notification source name (default: calling process)
    #[arg(short = 's', long, env = "NOTIFY_SOURCE", allow_hyphen_values = true)]
    pub source: Option<String>,

    /// Importance: low, normal or critical (default normal)
    #[arg(short = 'l', long, env = "NOTIFY_LEVEL")]
    pub level: Option<String>,

    /// Notification title
    #[arg(short = 't', long, allow_hyphen_values = true)]
    pub title: Option<String>,

    /// Notification message
    #[arg(short = 'm', long, allow_hyphen_values = true)]
    pub message: Option<String>,

    /// Internal tag of the message
    #[arg(short = 'g', long, env = "NOTIFY_TAG", allow_hyphen_values = true)]
    pub tag: Option<String>,

    /// Send the message in the background (non blocking)
    #[arg(short = 'f', long)]
    pub fork: bool,

    /// Print the encoded message instead of sending it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Configuration file
    #[arg(short = 'c', long, env = "NOTIFY_CLIENT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}
