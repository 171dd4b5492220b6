//! CLI argument definitions using clap
//!
//! - alfred new <name>            # Scaffold a project
//! - alfred learn <skill>...      # Teach the project new skills
//! - alfred skills                # List the skill catalogue
//! - alfred run <task> [flags]    # Run a task, flags go to the tool
//! - alfred clean                 # Remove generated configs

use clap::{ArgAction, Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "alfred")]
#[command(about = "Alfred - a modular JavaScript toolchain")]
#[command(
    long_about = r#"Alfred - a modular JavaScript toolchain

USAGE:
  alfred new my-lib              # Create a project with the default skills
  alfred learn react mocha       # Add skills to the current project
  alfred run build --prod        # Build every target for production
  alfred run lint --fix          # Pass flags through to the linter

For detailed help: alfred --help"#
)]
#[command(version, disable_version_flag = true, arg_required_else_help = true)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Overwrite user files that differ from the generated configs
    #[arg(short = 'u', long = "unsafe", global = true)]
    pub unsafe_overwrite: bool,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Project directory (defaults to the current directory)
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Write configs to the project root for this run
    #[arg(long, global = true)]
    pub show_configs: bool,

    /// Directory for generated configs for this run
    #[arg(long, global = true, value_name = "DIR")]
    pub configs_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Overrides applied on top of `package.json` and the environment
    pub fn config_overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();
        if self.show_configs {
            overrides.insert("show_configs".to_string(), "true".to_string());
        }
        if let Some(dir) = &self.configs_dir {
            overrides.insert("configs_dir".to_string(), dir.clone());
        }
        overrides
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a new project with the default skills
    New {
        /// Package name, also used as the directory name
        name: String,
    },

    /// Add skills from the catalogue to the current project
    Learn {
        /// Skill names
        #[arg(required = true)]
        skills: Vec<String>,
    },

    /// List the available skills
    Skills,

    /// Run a task (build, start, lint, format, test)
    Run {
        /// Task subcommand
        task: String,

        /// Flags handled by Alfred or passed through to the tool
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        flags: Vec<String>,
    },

    /// Remove the generated configs directory
    Clean,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_run_passes_flags_through() {
        let cli = Cli::try_parse_from(["alfred", "run", "build", "--prod", "--watch"]).unwrap();
        match cli.command {
            Commands::Run { task, flags } => {
                assert_eq!(task, "build");
                assert_eq!(flags, vec!["--prod", "--watch"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_before_subcommand() {
        let cli =
            Cli::try_parse_from(["alfred", "-u", "--debug", "--cwd", "/tmp/app", "clean"]).unwrap();
        assert!(cli.unsafe_overwrite);
        assert!(cli.debug);
        assert_eq!(cli.cwd, Some(PathBuf::from("/tmp/app")));
        assert!(matches!(cli.command, Commands::Clean));
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_learn_requires_a_skill() {
        let cli = Cli::try_parse_from(["alfred", "learn", "react", "mocha"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Learn { ref skills } if skills == &["react", "mocha"]
        ));

        assert!(Cli::try_parse_from(["alfred", "learn"]).is_err());
    }

    #[test]
    fn test_short_version_flag() {
        let err = Cli::try_parse_from(["alfred", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_config_overrides() {
        let cli = Cli::try_parse_from(["alfred", "run", "lint"]).unwrap();
        assert!(cli.config_overrides().is_empty());

        let cli = Cli::try_parse_from([
            "alfred",
            "--show-configs",
            "--configs-dir",
            "build-configs",
            "clean",
        ])
        .unwrap();
        let overrides = cli.config_overrides();
        assert_eq!(overrides["show_configs"], "true");
        assert_eq!(overrides["configs_dir"], "build-configs");
    }

    #[test]
    fn test_log_level_defaults_to_warn() {
        let cli = Cli::try_parse_from(["alfred", "skills"]).unwrap();
        assert_eq!(cli.log_level(), "warn");

        let cli = Cli::try_parse_from(["alfred", "--verbose", "skills"]).unwrap();
        assert_eq!(cli.log_level(), "info");
    }
}
