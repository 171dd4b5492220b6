//! Task runner
//!
//! Runs a task over the targets of a project one target at a time: flags are
//! applied, skills are negotiated for the target, the resolved skill's
//! configs are written and its hook is awaited before the next target
//! starts. The first error aborts the run.

use crate::error::AlfredResult;
use crate::project::{Project, WriteOptions};
use crate::skills::{HookContext, resolve_in};
use crate::target::{Target, dedupe_targets};
use serde::Serialize;

/// What happened for one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum TargetOutcome {
    /// The skill's hook ran to completion
    Completed { skill: String },
    /// The skill has no hook for the task; only its configs were written
    ConfiguredOnly { skill: String },
    /// No skill implements the task for this target
    Skipped,
}

/// Outcome of one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetRun {
    pub target: Target,
    #[serde(flatten)]
    pub outcome: TargetOutcome,
}

/// Outcome of a whole task run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub task: String,
    pub subcommand: String,
    /// Flags passed through to the tool
    pub flags: Vec<String>,
    pub targets: Vec<TargetRun>,
}

impl RunReport {
    /// Whether at least one skill ran or was configured
    pub fn did_anything(&self) -> bool {
        self.targets
            .iter()
            .any(|run| run.outcome != TargetOutcome::Skipped)
    }
}

/// Runs tasks for a project
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskRunner {
    options: WriteOptions,
}

impl TaskRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_write_options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    /// Targets the task runs for once env flags are applied
    pub fn select_targets(
        project: &Project,
        per_target: bool,
        env_target: &Target,
    ) -> Vec<Target> {
        if per_target {
            dedupe_targets(
                project
                    .targets()
                    .iter()
                    .map(|target| target.with_env(env_target.env)),
            )
        } else {
            vec![*env_target]
        }
    }

    /// Run the task behind `subcommand` with the raw command-line `flags`
    pub async fn run(
        &self,
        project: &mut Project,
        subcommand: &str,
        flags: &[String],
    ) -> AlfredResult<RunReport> {
        let task = project.registry().require_task(subcommand)?.clone();

        let mut env_target = project.default_target().with_env(task.default_env());
        let pass_through = task.handle_flags(flags, &mut env_target);
        let targets = Self::select_targets(project, task.run_for_each_target(), &env_target);

        tracing::info!(
            task = task.name(),
            targets = targets.len(),
            env = %env_target.env,
            "Running task"
        );

        let mut report = RunReport {
            task: task.name().to_string(),
            subcommand: subcommand.to_string(),
            flags: pass_through.clone(),
            targets: Vec::with_capacity(targets.len()),
        };

        for target in targets {
            let negotiated = project.negotiate(target)?;
            let Some(skill) = resolve_in(&negotiated, task.as_ref(), &target)? else {
                tracing::warn!(
                    task = task.name(),
                    %target,
                    "No skill can run this task, skipping"
                );
                report.targets.push(TargetRun {
                    target,
                    outcome: TargetOutcome::Skipped,
                });
                continue;
            };

            project.write_configs(&negotiated, self.options).await?;

            let outcome = match skill.hook_for(task.name()) {
                Some(hook) => {
                    let configs_dir = project.configs_dir();
                    let ctx = HookContext {
                        project_root: project.root(),
                        configs_dir: &configs_dir,
                        target,
                        skill,
                        flags: &pass_through,
                    };
                    tracing::debug!(skill = %skill.name, hook = %hook.describe(), "Running hook");
                    hook.run(&ctx).await?;
                    TargetOutcome::Completed {
                        skill: skill.name.clone(),
                    }
                }
                None => {
                    tracing::info!(
                        skill = %skill.name,
                        %target,
                        "Skill has no hook, configs written only"
                    );
                    TargetOutcome::ConfiguredOnly {
                        skill: skill.name.clone(),
                    }
                }
            };
            report.targets.push(TargetRun { target, outcome });
        }

        Ok(report)
    }
}
