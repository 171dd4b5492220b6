//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands;
use crate::console::CliConsole;
use alfred_core::error::ResultExt;
use alfred_core::{AlfredResult, Project, WriteOptions};
use std::collections::HashMap;
use std::path::PathBuf;

/// Everything a command handler needs besides its own arguments
pub struct CommandContext {
    pub cwd: PathBuf,
    /// Command-line config layer
    pub overrides: HashMap<String, String>,
    pub options: WriteOptions,
    pub console: CliConsole,
}

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> AlfredResult<()> {
    let overrides = cli.config_overrides();
    let cwd = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read the working directory")?,
    };
    tracing::debug!(cwd = %cwd.display(), command = ?cli.command, "Routing command");

    let ctx = CommandContext {
        cwd,
        overrides,
        options: WriteOptions::default().unsafe_overwrite(cli.unsafe_overwrite),
        console: CliConsole::new(cli.verbose || cli.debug),
    };

    match cli.command {
        Commands::New { name } => commands::new::execute(&ctx, &name).await,
        Commands::Learn { skills } => commands::learn::execute(&ctx, &skills).await,
        Commands::Skills => commands::skills::execute(&ctx).await,
        Commands::Run { task, flags } => commands::run::execute(&ctx, &task, &flags).await,
        Commands::Clean => commands::clean::execute(&ctx).await,
    }
}

impl CommandContext {
    /// Load the project in the working directory with the command-line layer
    pub async fn load_project(&self) -> AlfredResult<Project> {
        Project::load_with(&self.cwd, self.overrides.clone()).await
    }
}
