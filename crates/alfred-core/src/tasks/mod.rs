//! Tasks
//!
//! A task is a named capability contract (build, start, lint, format, test)
//! that skills implement. Tasks are stateless: they pick the env from
//! command-line flags and choose one skill among the candidates for a target.

mod builtin;
mod flags;
mod resolve;

pub use builtin::{BuiltinTask, builtin_tasks};
pub use flags::handle_env_flags;
pub use resolve::resolve_default_skill;

use crate::error::AlfredResult;
use crate::skills::Skill;
use crate::target::{Env, Target};

pub const BUILD: &str = "@alfred/task-build";
pub const START: &str = "@alfred/task-start";
pub const LINT: &str = "@alfred/task-lint";
pub const FORMAT: &str = "@alfred/task-format";
pub const TEST: &str = "@alfred/task-test";

/// A capability contract skills can implement
pub trait Task: Send + Sync {
    /// Unique task name, referenced by skills
    fn name(&self) -> &str;

    /// CLI subcommand that runs the task
    fn subcommand(&self) -> &str;

    fn description(&self) -> &str;

    /// Run once per target of the project rather than once per project
    fn run_for_each_target(&self) -> bool {
        false
    }

    /// Env used when no env flag is given
    fn default_env(&self) -> Env {
        Env::Development
    }

    /// Apply env-selecting flags to `target`, returning the flags left for the tool
    fn handle_flags(&self, flags: &[String], target: &mut Target) -> Vec<String> {
        handle_env_flags(flags, target)
    }

    /// Pick the skill that runs this task for `target`
    fn resolve_skill<'a>(
        &self,
        candidates: &[&'a Skill],
        target: &Target,
    ) -> AlfredResult<Option<&'a Skill>> {
        resolve_default_skill(self.subcommand(), candidates, target)
    }
}

impl std::fmt::Debug for dyn Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name())
            .field("subcommand", &self.subcommand())
            .finish()
    }
}
