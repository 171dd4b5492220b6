//! Ordered, name-indexed skill collection

use super::super::types::Skill;
use crate::error::{AlfredError, AlfredResult};
use crate::target::Supports;
use std::collections::HashMap;

/// Ordered mapping from skill name to skill.
///
/// Skills live in an arena in insertion order with a name index on the side.
/// Updates through [`SkillMap::with_skill`] produce a new snapshot so a map
/// handed to one stage of the pipeline is never changed behind its back.
#[derive(Debug, Clone, Default)]
pub struct SkillMap {
    skills: Vec<Skill>,
    index: HashMap<String, usize>,
}

impl SkillMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `skills`, failing on the first duplicate name
    pub fn from_skills(skills: impl IntoIterator<Item = Skill>) -> AlfredResult<Self> {
        let mut map = Self::new();
        for skill in skills {
            map.insert(skill)?;
        }
        Ok(map)
    }

    /// Add a skill; names must be unique
    pub fn insert(&mut self, skill: Skill) -> AlfredResult<()> {
        if self.index.contains_key(&skill.name) {
            return Err(AlfredError::duplicate_skill(&skill.name));
        }
        skill.validate()?;

        self.index.insert(skill.name.clone(), self.skills.len());
        self.skills.push(skill);
        Ok(())
    }

    /// New snapshot with `skill` replacing the entry of the same name
    pub fn with_skill(&self, skill: Skill) -> AlfredResult<Self> {
        let position = *self.index.get(&skill.name).ok_or_else(|| {
            AlfredError::not_found_resource(
                format!("skill '{}' is not registered", skill.name),
                "Skill",
            )
        })?;
        skill.validate()?;

        let mut next = self.clone();
        next.skills[position] = skill;
        Ok(next)
    }

    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.index.get(name).map(|&i| &self.skills[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.skills.iter().map(|s| s.name.as_str()).collect()
    }

    /// Skills implementing `task`, in insertion order
    pub fn implementing(&self, task: &str) -> Vec<&Skill> {
        self.skills.iter().filter(|s| s.implements(task)).collect()
    }

    /// Capability matrices of every skill that declares one
    pub fn supports_matrices(&self) -> Vec<&Supports> {
        self.skills.iter().filter_map(|s| s.supports.as_ref()).collect()
    }
}

impl<'a> IntoIterator for &'a SkillMap {
    type Item = &'a Skill;
    type IntoIter = std::slice::Iter<'a, Skill>;

    fn into_iter(self) -> Self::IntoIter {
        self.skills.iter()
    }
}
