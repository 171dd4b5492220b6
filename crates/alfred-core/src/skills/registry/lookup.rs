//! Skill resolution for tasks

use super::super::types::Skill;
use super::skill_map::SkillMap;
use super::types::SkillRegistry;
use crate::error::{AlfredError, AlfredResult};
use crate::target::Target;
use crate::tasks::Task;

impl SkillRegistry {
    /// Which registered skill handles `subcommand` for `target`.
    ///
    /// `Ok(None)` means no skill implements the task for that target.
    pub fn resolve_for_task(
        &self,
        subcommand: &str,
        target: &Target,
    ) -> AlfredResult<Option<&Skill>> {
        let task = self.require_task(subcommand)?;
        resolve_in(&self.skills, task.as_ref(), target)
    }

    /// Apply the task's flag handling to `target`, returning pass-through flags
    pub fn handle_flags(
        &self,
        subcommand: &str,
        flags: &[String],
        target: &mut Target,
    ) -> AlfredResult<Vec<String>> {
        let task = self.require_task(subcommand)?;
        Ok(task.handle_flags(flags, target))
    }
}

/// Resolve the skill running `task` for `target` among `skills`.
///
/// Per-target tasks require every implementing skill to declare a `supports`
/// matrix.
pub fn resolve_in<'a>(
    skills: &'a SkillMap,
    task: &dyn Task,
    target: &Target,
) -> AlfredResult<Option<&'a Skill>> {
    let candidates = skills.implementing(task.name());

    if task.run_for_each_target() {
        if let Some(skill) = candidates.iter().find(|s| s.supports.is_none()) {
            return Err(AlfredError::missing_supports(&skill.name, task.name()));
        }
    }

    let resolved = task.resolve_skill(&candidates, target)?;
    tracing::debug!(
        task = task.name(),
        %target,
        skill = resolved.map(|s| s.name.as_str()),
        "Resolved skill"
    );
    Ok(resolved)
}
