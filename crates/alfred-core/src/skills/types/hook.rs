//! Skill hooks
//!
//! A hook performs the actual work of a task (linting, bundling, testing) by
//! calling out to a third-party binary. The engine only awaits completion and
//! propagates failure.

use super::skill::Skill;
use crate::error::{AlfredError, AlfredResult};
use crate::target::Target;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Everything a hook gets to see when it runs
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    pub project_root: &'a Path,
    pub configs_dir: &'a Path,
    pub target: Target,
    /// The negotiated skill the hook belongs to
    pub skill: &'a Skill,
    /// Flags passed through from the command line
    pub flags: &'a [String],
}

/// The work a skill performs for a task
#[async_trait]
pub trait SkillHook: Send + Sync {
    /// Short human-readable description, e.g. the command line
    fn describe(&self) -> String;

    /// Run the hook to completion
    async fn run(&self, ctx: &HookContext<'_>) -> AlfredResult<()>;
}

/// Hook that spawns an external binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHook {
    pub program: String,
    /// Arguments; `{root}`, `{configs}` and `{env}` are substituted
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
    /// Capture stdout/stderr instead of streaming them to the terminal
    pub capture_output: bool,
}

impl CommandHook {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
            capture_output: false,
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn capture_output(mut self) -> Self {
        self.capture_output = true;
        self
    }

    /// Arguments with placeholders substituted and pass-through flags appended
    pub fn expand_args(&self, ctx: &HookContext<'_>) -> Vec<String> {
        let root = ctx.project_root.display().to_string();
        let configs = ctx.configs_dir.display().to_string();
        let env = ctx.target.env.as_str();

        self.args
            .iter()
            .map(|arg| {
                arg.replace("{root}", &root)
                    .replace("{configs}", &configs)
                    .replace("{env}", env)
            })
            .chain(ctx.flags.iter().cloned())
            .collect()
    }

    fn command(&self, ctx: &HookContext<'_>) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.expand_args(ctx))
            .current_dir(ctx.project_root)
            .env("NODE_ENV", ctx.target.env.as_str())
            .envs(&self.env)
            .stdin(Stdio::null());
        cmd
    }
}

impl fmt::Display for CommandHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[async_trait]
impl SkillHook for CommandHook {
    fn describe(&self) -> String {
        self.to_string()
    }

    async fn run(&self, ctx: &HookContext<'_>) -> AlfredResult<()> {
        let mut cmd = self.command(ctx);
        tracing::info!(
            skill = %ctx.skill.name,
            target = %ctx.target,
            command = %self,
            "Running skill hook"
        );

        if self.capture_output {
            let output = cmd
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output()
                .await
                .map_err(|e| self.spawn_error(e))?;

            if output.status.success() {
                return Ok(());
            }

            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let diagnostics = if stderr.trim().is_empty() {
                stdout.into_owned()
            } else {
                stderr.into_owned()
            };
            return Err(AlfredError::external_tool(
                &self.program,
                format!("exited with status {:?}", output.status.code()),
            )
            .with_exit_code(output.status.code())
            .with_output(diagnostics));
        }

        let status = cmd
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if status.success() {
            Ok(())
        } else {
            Err(AlfredError::external_tool(
                &self.program,
                format!("exited with status {:?}", status.code()),
            )
            .with_exit_code(status.code()))
        }
    }
}

impl CommandHook {
    fn spawn_error(&self, error: std::io::Error) -> AlfredError {
        AlfredError::external_tool(&self.program, format!("failed to start: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{Env, Platform, ProjectType};
    use std::path::PathBuf;

    fn target() -> Target {
        Target::new(Env::Production, Platform::Browser, ProjectType::App)
    }

    #[test]
    fn test_expand_args() {
        let hook = CommandHook::new("webpack").with_args([
            "--config",
            "{configs}/webpack.config.js",
            "--mode",
            "{env}",
        ]);
        let skill = Skill::new("webpack", "Bundler");
        let root = PathBuf::from("/project");
        let configs = PathBuf::from("/project/.configs");
        let flags = vec!["--watch".to_string()];
        let ctx = HookContext {
            project_root: &root,
            configs_dir: &configs,
            target: target(),
            skill: &skill,
            flags: &flags,
        };

        assert_eq!(
            hook.expand_args(&ctx),
            vec![
                "--config",
                "/project/.configs/webpack.config.js",
                "--mode",
                "production",
                "--watch"
            ]
        );
    }

    #[test]
    fn test_display() {
        let hook = CommandHook::new("eslint").with_args(["src", "tests"]);
        assert_eq!(hook.to_string(), "eslint src tests");
        assert_eq!(hook.describe(), "eslint src tests");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_successful_command() {
        let dir = tempfile::tempdir().unwrap();
        let skill = Skill::new("ok", "Succeeds");
        let ctx = HookContext {
            project_root: dir.path(),
            configs_dir: dir.path(),
            target: target(),
            skill: &skill,
            flags: &[],
        };

        CommandHook::new("sh")
            .with_args(["-c", "test \"$NODE_ENV\" = production"])
            .run(&ctx)
            .await
            .unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failed_command_surfaces_diagnostics() {
        let dir = tempfile::tempdir().unwrap();
        let skill = Skill::new("broken", "Fails");
        let ctx = HookContext {
            project_root: dir.path(),
            configs_dir: dir.path(),
            target: target(),
            skill: &skill,
            flags: &[],
        };

        let err = CommandHook::new("sh")
            .with_args(["-c", "echo '2 problems found' >&2; exit 3"])
            .capture_output()
            .run(&ctx)
            .await
            .unwrap_err();

        match err {
            AlfredError::ExternalTool {
                tool,
                exit_code,
                output,
                ..
            } => {
                assert_eq!(tool, "sh");
                assert_eq!(exit_code, Some(3));
                assert_eq!(output.as_deref(), Some("2 problems found\n"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_binary_is_external_tool_error() {
        let dir = tempfile::tempdir().unwrap();
        let skill = Skill::new("ghost", "Missing binary");
        let ctx = HookContext {
            project_root: dir.path(),
            configs_dir: dir.path(),
            target: target(),
            skill: &skill,
            flags: &[],
        };

        let err = CommandHook::new("alfred-definitely-not-installed")
            .run(&ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, AlfredError::ExternalTool { .. }));
    }
}
