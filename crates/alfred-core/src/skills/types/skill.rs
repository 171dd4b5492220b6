//! Main Skill type definition

use super::config_file::ConfigFile;
use super::hook::SkillHook;
use super::template::SkillFile;
use super::transform::{TransformContext, TransformFn};
use crate::error::{AlfredError, AlfredResult};
use crate::merge::ConfigMerger;
use crate::target::{Supports, Target};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// A pluggable unit contributing configs, dependencies and task implementations.
///
/// Skills are values: every extension returns a new `Skill` and leaves the
/// original untouched.
#[derive(Clone)]
pub struct Skill {
    pub name: String,
    pub description: String,
    pub configs: Vec<ConfigFile>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    /// Names of the tasks this skill implements
    pub tasks: Vec<String>,
    /// Capability matrix; `None` when the skill never declared one
    pub supports: Option<Supports>,
    /// Preferred candidate when several skills implement the same task
    pub default: bool,
    /// Run hooks keyed by task name
    pub hooks: BTreeMap<String, Arc<dyn SkillHook>>,
    /// Transforms keyed by the peer skill they cooperate with
    pub transforms: BTreeMap<String, TransformFn>,
    /// Template files written when scaffolding a project
    pub files: Vec<SkillFile>,
}

// Builder methods
impl Skill {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            configs: Vec::new(),
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
            tasks: Vec::new(),
            supports: None,
            default: false,
            hooks: BTreeMap::new(),
            transforms: BTreeMap::new(),
            files: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: ConfigFile) -> Self {
        self.configs.push(config);
        self
    }

    pub fn with_dependency(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.dependencies.insert(name.into(), version.into());
        self
    }

    pub fn with_dev_dependency(
        mut self,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        self.dev_dependencies.insert(name.into(), version.into());
        self
    }

    /// Declare a task this skill implements
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        let task = task.into();
        if !self.tasks.contains(&task) {
            self.tasks.push(task);
        }
        self
    }

    pub fn with_supports(mut self, supports: Supports) -> Self {
        self.supports = Some(supports);
        self
    }

    /// Flag as the default candidate for its tasks
    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }

    /// Attach the hook run for `task`; also declares the task
    pub fn with_hook(mut self, task: impl Into<String>, hook: impl SkillHook + 'static) -> Self {
        let task = task.into();
        self.hooks.insert(task.clone(), Arc::new(hook));
        self.with_task(task)
    }

    /// Register a transform applied when `peer` is present in the same project
    pub fn with_transform<F>(mut self, peer: impl Into<String>, transform: F) -> Self
    where
        F: Fn(Skill, &TransformContext<'_>) -> AlfredResult<Skill> + Send + Sync + 'static,
    {
        self.transforms.insert(peer.into(), Arc::new(transform));
        self
    }

    pub fn with_file(mut self, file: SkillFile) -> Self {
        self.files.push(file);
        self
    }
}

// Queries
impl Skill {
    /// Config fragment by alias
    pub fn config(&self, alias: &str) -> Option<&ConfigFile> {
        self.configs.iter().find(|c| c.alias == alias)
    }

    /// Whether the skill implements `task`
    pub fn implements(&self, task: &str) -> bool {
        self.tasks.iter().any(|t| t == task)
    }

    pub fn hook_for(&self, task: &str) -> Option<&Arc<dyn SkillHook>> {
        self.hooks.get(task)
    }

    /// Whether the skill can handle `target`.
    ///
    /// A skill without a capability matrix handles every target.
    pub fn supports_target(&self, target: &Target) -> bool {
        self.supports
            .as_ref()
            .is_none_or(|supports| supports.includes(target))
    }

    /// Names of the peers this skill has transforms for
    pub fn transform_peers(&self) -> impl Iterator<Item = &str> {
        self.transforms.keys().map(String::as_str)
    }

    /// Reject skills whose config aliases collide
    pub fn validate(&self) -> AlfredResult<()> {
        if self.name.trim().is_empty() {
            return Err(AlfredError::invalid_field("name", "skill name cannot be empty"));
        }

        let mut aliases = HashSet::new();
        for config in &self.configs {
            if !aliases.insert(config.alias.as_str()) {
                return Err(AlfredError::invalid_field(
                    format!("{}.configs", self.name),
                    format!("config alias '{}' is declared twice", config.alias),
                ));
            }
        }
        Ok(())
    }
}

// Extension
impl Skill {
    /// Deep-merge `extension` into the config named `alias` using smart merging
    pub fn extend_config(self, alias: &str, extension: Value) -> AlfredResult<Self> {
        self.extend_config_with(alias, extension, &ConfigMerger::new().smart())
    }

    /// Deep-merge `extension` into the config named `alias` with `merger`
    pub fn extend_config_with(
        mut self,
        alias: &str,
        extension: Value,
        merger: &ConfigMerger,
    ) -> AlfredResult<Self> {
        let name = self.name.clone();
        let config = self
            .configs
            .iter_mut()
            .find(|c| c.alias == alias)
            .ok_or_else(|| {
                AlfredError::not_found_resource(
                    format!("skill '{}' has no config '{}'", name, alias),
                    "Config",
                )
            })?;

        config.config = merger.merge(&config.config, &extension)?;
        tracing::debug!(skill = %name, alias, "Extended config");
        Ok(self)
    }

    /// Add dependencies, overriding versions already present
    pub fn add_dependencies<I, K, V>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.dependencies
            .extend(dependencies.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add dev dependencies, overriding versions already present
    pub fn add_dev_dependencies<I, K, V>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.dev_dependencies
            .extend(dependencies.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Serializable summary of this skill
    pub fn info(&self) -> SkillInfo {
        SkillInfo::from(self)
    }
}

impl fmt::Debug for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Skill")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("configs", &self.configs)
            .field("dependencies", &self.dependencies)
            .field("dev_dependencies", &self.dev_dependencies)
            .field("tasks", &self.tasks)
            .field("supports", &self.supports)
            .field("default", &self.default)
            .field("hooks", &self.hooks.keys().collect::<Vec<_>>())
            .field("transforms", &self.transforms.keys().collect::<Vec<_>>())
            .field("files", &self.files)
            .finish()
    }
}

/// Listing entry for a skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillInfo {
    pub name: String,
    pub description: String,
    pub tasks: Vec<String>,
    pub configs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports: Option<Supports>,
    pub default: bool,
    pub transforms: Vec<String>,
}

impl From<&Skill> for SkillInfo {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            description: skill.description.clone(),
            tasks: skill.tasks.clone(),
            configs: skill.configs.iter().map(|c| c.alias.clone()).collect(),
            supports: skill.supports.clone(),
            default: skill.default,
            transforms: skill.transforms.keys().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::types::{CommandHook, FileType};
    use crate::target::{Env, Platform, ProjectType};
    use serde_json::json;

    fn eslint() -> Skill {
        Skill::new("eslint", "Lint all your JS files").with_config(ConfigFile::new(
            "eslint",
            ".eslintrc.json",
            FileType::Json,
            json!({"extends": ["eslint:recommended"], "rules": {}}),
        ))
    }

    #[test]
    fn test_extend_config_merges_deeply() {
        let original = eslint();
        let extended = original
            .clone()
            .extend_config(
                "eslint",
                json!({"parser": "babel-eslint", "extends": ["airbnb"]}),
            )
            .unwrap();

        assert_eq!(
            extended.config("eslint").unwrap().config,
            json!({
                "extends": ["eslint:recommended", "airbnb"],
                "rules": {},
                "parser": "babel-eslint"
            })
        );
        assert!(original.config("eslint").unwrap().config.get("parser").is_none());
    }

    #[test]
    fn test_extend_missing_alias_fails() {
        let err = eslint().extend_config("webpack", json!({})).unwrap_err();
        assert!(matches!(err, AlfredError::NotFound { .. }));
    }

    #[test]
    fn test_validate_rejects_duplicate_aliases() {
        let skill = eslint().with_config(ConfigFile::new(
            "eslint",
            ".eslintrc.js",
            FileType::Module,
            json!({}),
        ));
        assert!(matches!(
            skill.validate(),
            Err(AlfredError::InvalidInput { .. })
        ));
        assert!(eslint().validate().is_ok());
    }

    #[test]
    fn test_supports_target_defaults_to_everything() {
        let target = Target::new(Env::Test, Platform::Electron, ProjectType::Lib);
        assert!(eslint().supports_target(&target));

        let node_only = eslint().with_supports(Supports::new(&[Platform::Node], &ProjectType::ALL));
        assert!(!node_only.supports_target(&target));
        assert!(node_only.supports_target(&Target::new(
            Env::Test,
            Platform::Node,
            ProjectType::Lib
        )));
    }

    #[test]
    fn test_hook_declares_task() {
        let skill = eslint().with_hook("lint", CommandHook::new("eslint"));
        assert!(skill.implements("lint"));
        assert!(skill.hook_for("lint").is_some());
        assert!(skill.hook_for("build").is_none());
    }

    #[test]
    fn test_dependencies_are_additive() {
        let skill = eslint()
            .with_dev_dependency("eslint", "5.0.0")
            .add_dev_dependencies([("babel-eslint", "10.0.0"), ("eslint", "5.1.0")]);

        assert_eq!(skill.dev_dependencies.len(), 2);
        assert_eq!(skill.dev_dependencies["eslint"], "5.1.0");
    }

    #[test]
    fn test_info_lists_aliases_and_peers() {
        let skill = eslint().with_transform("babel", |skill, _| Ok(skill));
        let info = skill.info();
        assert_eq!(info.configs, vec!["eslint"]);
        assert_eq!(info.transforms, vec!["babel"]);
        assert!(format!("{:?}", skill).contains("babel"));
    }
}
