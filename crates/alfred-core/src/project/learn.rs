//! Learning new skills

use super::manifest::DependencyKind;
use super::types::Project;
use super::writer::{WriteOptions, WriteReport};
use crate::error::{AlfredError, AlfredResult};
use crate::skills::builtin_skill;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of [`Project::learn`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LearnReport {
    /// Skills added to the project
    pub learned: Vec<String>,
    /// Requested skills the project already had
    pub already_known: Vec<String>,
    /// Packages added to `dependencies`
    pub added_dependencies: Vec<String>,
    /// Packages added to `devDependencies`
    pub added_dev_dependencies: Vec<String>,
    pub writes: WriteReport,
}

impl Project {
    /// Teach the project the catalogue skills `names`.
    ///
    /// Every name is checked against the catalogue before anything changes.
    /// The new skills are recorded in the `"alfred"` section, the
    /// dependencies of the negotiated skills are added to the manifest and
    /// the configs are rewritten.
    pub async fn learn<S: AsRef<str>>(
        &mut self,
        names: &[S],
        options: WriteOptions,
    ) -> AlfredResult<LearnReport> {
        let mut report = LearnReport::default();
        let mut skills = Vec::new();
        for name in names {
            let name = name.as_ref();
            if self.registry.contains(name) || report.learned.iter().any(|n| n == name) {
                tracing::warn!(skill = name, "Skill already learned");
                report.already_known.push(name.to_string());
                continue;
            }
            let skill = builtin_skill(name).ok_or_else(|| {
                AlfredError::not_found_resource(
                    format!("'{}' is not a known skill", name),
                    "Skill",
                )
            })?;
            report.learned.push(name.to_string());
            skills.push(skill);
        }

        let mut registry = self.registry.clone();
        for skill in skills {
            registry.register(skill)?;
        }
        self.registry = registry;
        self.config.skills.extend(report.learned.iter().cloned());
        self.refresh_targets();

        let mut dependencies = BTreeMap::new();
        let mut dev_dependencies = BTreeMap::new();
        for target in self.targets.clone() {
            let negotiated = self.negotiate(target)?;
            for skill in &negotiated {
                dependencies.extend(skill.dependencies.clone());
                dev_dependencies.extend(skill.dev_dependencies.clone());
            }
        }

        report.added_dependencies = self
            .manifest
            .add_dependencies(DependencyKind::Production, &dependencies);
        report.added_dev_dependencies = self
            .manifest
            .add_dependencies(DependencyKind::Development, &dev_dependencies);
        self.manifest.record_skills(&report.learned)?;
        self.manifest.save().await?;

        let negotiated = self.negotiate(self.default_target())?;
        report.writes = self.write_configs(&negotiated, options).await?;

        tracing::info!(learned = ?report.learned, "Learned skills");
        Ok(report)
    }
}
