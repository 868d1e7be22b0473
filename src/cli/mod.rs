//! CLI module providing command-line interface functionality
//!
//! [`CliApp::run`] is the dispatcher: parse, resolve, then either hand the
//! send to a background child or run it in this process.

pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::{error, warn};

use crate::errors::{AppError, AppResult};
use crate::process::{child_args, enter_new_session, is_detached_child, spawn_detached};

pub use args::ArgProcessor;
pub use commands::Cli;
pub use context::CliContext;
pub use handlers::SendHandler;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Parse command line arguments and send the notification
    pub async fn run() -> AppResult<()> {
        let cli = Self::parse_args()?;
        let detached = is_detached_child();

        if detached {
            enter_new_session()?;
        }

        let context = CliContext::new(cli.config.clone(), cli.verbose, detached)?;

        // Held until return so the background log file gets flushed
        let _log_guard = context.init_logging()?;

        let result = Self::dispatch(&cli, &context).await;
        if let Err(err) = &result {
            if detached {
                error!(category = err.category(), "{}", err);
            }
        }
        result
    }

    async fn dispatch(cli: &Cli, context: &CliContext) -> AppResult<()> {
        let draft = ArgProcessor::new(context.config_manager.config()).resolve(cli);

        if cli.fork && !context.detached {
            if cli.dry_run {
                warn!("--dry-run given, sending in the foreground");
            } else {
                let args = child_args(&draft, context.config_manager.config_path(), cli.verbose);
                spawn_detached(&args)?;
                return Ok(());
            }
        }

        SendHandler::from_context(context, cli.dry_run)
            .send(draft)
            .await
    }

    /// Parse arguments; usage errors print the usage text to stdout
    fn parse_args() -> AppResult<Cli> {
        match Cli::try_parse() {
            Ok(cli) => Ok(cli),
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
                _ => {
                    println!("{}", Cli::command().render_help());
                    Err(AppError::usage(Self::first_line(&err.to_string())))
                }
            },
        }
    }

    fn first_line(rendered: &str) -> String {
        let line = rendered.lines().next().unwrap_or_default();
        line.strip_prefix("error: ").unwrap_or(line).to_string()
    }
}
