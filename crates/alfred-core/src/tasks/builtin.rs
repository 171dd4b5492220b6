//! Built-in tasks

use super::{BUILD, FORMAT, LINT, START, TEST, Task};
use crate::target::Env;
use std::sync::Arc;

/// A task described entirely by static data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinTask {
    pub name: &'static str,
    pub subcommand: &'static str,
    pub description: &'static str,
    pub run_for_each_target: bool,
    pub default_env: Env,
}

impl BuiltinTask {
    pub const fn new(
        name: &'static str,
        subcommand: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            subcommand,
            description,
            run_for_each_target: false,
            default_env: Env::Development,
        }
    }

    pub const fn for_each_target(mut self) -> Self {
        self.run_for_each_target = true;
        self
    }

    pub const fn with_default_env(mut self, env: Env) -> Self {
        self.default_env = env;
        self
    }
}

impl Task for BuiltinTask {
    fn name(&self) -> &str {
        self.name
    }

    fn subcommand(&self) -> &str {
        self.subcommand
    }

    fn description(&self) -> &str {
        self.description
    }

    fn run_for_each_target(&self) -> bool {
        self.run_for_each_target
    }

    fn default_env(&self) -> Env {
        self.default_env
    }
}

/// build, start, lint, format and test
pub fn builtin_tasks() -> Vec<Arc<dyn Task>> {
    vec![
        Arc::new(
            BuiltinTask::new(BUILD, "build", "Build the project for every target")
                .for_each_target()
                .with_default_env(Env::Production),
        ),
        Arc::new(BuiltinTask::new(START, "start", "Start a development server")),
        Arc::new(BuiltinTask::new(LINT, "lint", "Lint the project")),
        Arc::new(BuiltinTask::new(FORMAT, "format", "Format the project")),
        Arc::new(
            BuiltinTask::new(TEST, "test", "Run the project's tests").with_default_env(Env::Test),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_subcommands_are_unique() {
        let tasks = builtin_tasks();
        let mut subcommands: Vec<&str> = tasks.iter().map(|t| t.subcommand()).collect();
        subcommands.sort_unstable();
        subcommands.dedup();
        assert_eq!(subcommands.len(), tasks.len());
    }

    #[test]
    fn test_only_build_runs_per_target() {
        for task in builtin_tasks() {
            assert_eq!(task.run_for_each_target(), task.name() == BUILD);
        }
    }
}
