//! Pairwise skill transforms

use super::skill::Skill;
use crate::error::AlfredResult;
use crate::skills::registry::SkillMap;
use crate::target::Target;
use std::sync::Arc;

/// What a transform can see besides the skill it adjusts
#[derive(Debug, Clone, Copy)]
pub struct TransformContext<'a> {
    /// The peer skill the transform is keyed by, already negotiated
    pub peer: &'a Skill,
    /// Snapshot of every skill in the project at this step
    pub skills: &'a SkillMap,
    pub target: Target,
}

/// Pure function adjusting a skill when a given peer is present.
///
/// It receives the skill by value and returns the extended skill. Renaming
/// the skill is rejected by the pipeline.
pub type TransformFn =
    Arc<dyn Fn(Skill, &TransformContext<'_>) -> AlfredResult<Skill> + Send + Sync>;
