//! Skill registry types and core implementation

use super::super::types::Skill;
use super::skill_map::SkillMap;
use crate::error::{AlfredError, AlfredResult};
use crate::tasks::{Task, builtin_tasks};
use std::sync::Arc;

/// The skills and tasks known to a project
#[derive(Debug, Clone, Default)]
pub struct SkillRegistry {
    /// Registered skills in registration order
    pub(super) skills: SkillMap,
    /// Registered tasks
    pub(super) tasks: Vec<Arc<dyn Task>>,
}

impl SkillRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with build, start, lint, format and test registered
    pub fn with_builtin_tasks() -> Self {
        let mut registry = Self::new();
        for task in builtin_tasks() {
            registry.register_task(task);
        }
        registry
    }

    /// Register a skill; fails if its name is already taken
    pub fn register(&mut self, skill: Skill) -> AlfredResult<()> {
        tracing::debug!(skill = %skill.name, "Registering skill");
        self.skills.insert(skill)
    }

    /// Register a task, replacing any task with the same name
    pub fn register_task(&mut self, task: Arc<dyn Task>) {
        self.tasks.retain(|t| t.name() != task.name());
        self.tasks.push(task);
    }

    /// Get a skill by name
    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.skills.get(name)
    }

    /// Check if a skill exists
    pub fn contains(&self, name: &str) -> bool {
        self.skills.contains(name)
    }

    /// Get skill count
    pub fn count(&self) -> usize {
        self.skills.len()
    }

    /// The registered skills
    pub fn skills(&self) -> &SkillMap {
        &self.skills
    }

    pub fn tasks(&self) -> &[Arc<dyn Task>] {
        &self.tasks
    }

    /// Task run by `subcommand`
    pub fn task(&self, subcommand: &str) -> Option<&Arc<dyn Task>> {
        self.tasks.iter().find(|t| t.subcommand() == subcommand)
    }

    /// Task run by `subcommand`, or a `NotFound` error listing the known ones
    pub fn require_task(&self, subcommand: &str) -> AlfredResult<&Arc<dyn Task>> {
        self.task(subcommand).ok_or_else(|| {
            let known: Vec<&str> = self.tasks.iter().map(|t| t.subcommand()).collect();
            AlfredError::not_found_resource(
                format!(
                    "no task runs '{}' (available: {})",
                    subcommand,
                    known.join(", ")
                ),
                "Task",
            )
        })
    }
}
