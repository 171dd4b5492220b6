//! Alfred CLI application
//!
//! A modular JavaScript toolchain: projects learn skills (babel, eslint,
//! webpack, jest, ...) and Alfred writes their configs and runs them.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/alfred-cli
//! ```
//!
//! # Commands
//!
//! - `alfred new <name>`: scaffold a project with the default skills
//! - `alfred learn <skill>...`: add skills to the current project
//! - `alfred skills`: list the skill catalogue
//! - `alfred run <task> [flags...]`: run build, start, lint, format or test
//! - `alfred clean`: remove the generated configs directory

mod args;
mod commands;
mod console;
mod router;

use alfred_core::UserFriendlyError;
use args::Cli;
use clap::Parser;
use console::CliConsole;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match router::route(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(error = ?error, "Command failed");
            CliConsole::new(false).print_error(&UserFriendlyError::from(&error));
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over `--debug` and `--verbose`
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
