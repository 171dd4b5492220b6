//! Project type and loading

use super::manifest::PackageManifest;
use crate::config::{AlfredConfig, ConfigLoader};
use crate::error::{AlfredError, AlfredResult};
use crate::pipeline::negotiate;
use crate::skills::{Skill, SkillMap, SkillRegistry};
use crate::target::{Env, Platform, ProjectType, Target, target_closure};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A loaded project with its skills registered and targets computed
#[derive(Debug, Clone)]
pub struct Project {
    pub(super) root: PathBuf,
    pub(super) manifest: PackageManifest,
    pub(super) config: AlfredConfig,
    pub(super) registry: SkillRegistry,
    pub(super) targets: Vec<Target>,
}

impl Project {
    /// Load the project in `root` using its manifest and the environment
    pub async fn load(root: impl Into<PathBuf>) -> AlfredResult<Self> {
        Self::load_with(root, HashMap::new()).await
    }

    /// Load the project in `root`, applying command-line overrides last
    pub async fn load_with(
        root: impl Into<PathBuf>,
        overrides: HashMap<String, String>,
    ) -> AlfredResult<Self> {
        let root = root.into();
        let manifest = PackageManifest::load(&root).await?;
        let config = ConfigLoader::new()
            .with_defaults()
            .with_file(manifest.path())
            .with_env()
            .with_args(overrides)
            .load()?;

        Self::from_parts(root, manifest, config)
    }

    /// Assemble a project from an already loaded manifest and configuration
    pub fn from_parts(
        root: impl Into<PathBuf>,
        manifest: PackageManifest,
        config: AlfredConfig,
    ) -> AlfredResult<Self> {
        config.validate()?;
        let mut registry = SkillRegistry::with_builtin_tasks();
        registry.register_builtins(&config.skills)?;

        let mut project = Self {
            root: root.into(),
            manifest,
            config,
            registry,
            targets: Vec::new(),
        };
        project.refresh_targets();
        tracing::info!(
            root = %project.root.display(),
            skills = project.registry.count(),
            targets = project.targets.len(),
            "Loaded project"
        );
        Ok(project)
    }

    /// Register a skill that is not part of the catalogue.
    ///
    /// The skill is not recorded in the `"alfred"` section.
    pub fn register_skill(&mut self, skill: Skill) -> AlfredResult<()> {
        self.registry.register(skill)?;
        self.refresh_targets();
        Ok(())
    }

    pub(super) fn refresh_targets(&mut self) {
        self.targets = target_closure(
            &self.config.targets,
            &self.registry.skills().supports_matrices(),
        );
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> &PackageManifest {
        &self.manifest
    }

    pub fn config(&self) -> &AlfredConfig {
        &self.config
    }

    pub fn registry(&self) -> &SkillRegistry {
        &self.registry
    }

    /// The skills as registered, before negotiation
    pub fn skills(&self) -> &SkillMap {
        self.registry.skills()
    }

    /// Target closure of the project
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Target used by project-wide tasks and when writing configs
    pub fn default_target(&self) -> Target {
        self.targets.first().copied().unwrap_or(Target::new(
            Env::Production,
            Platform::Browser,
            ProjectType::App,
        ))
    }

    /// Directory configs are written to
    pub fn configs_dir(&self) -> PathBuf {
        if self.config.show_configs {
            self.root.clone()
        } else {
            self.root.join(&self.config.configs_dir)
        }
    }

    /// Directory owned by Alfred, whatever `show_configs` says
    pub fn generated_dir(&self) -> PathBuf {
        self.root.join(&self.config.configs_dir)
    }

    /// Negotiated skills for `target`
    pub fn negotiate(&self, target: Target) -> AlfredResult<SkillMap> {
        negotiate(self.registry.skills(), target)
    }

    /// Remove the generated configs directory; returns whether it existed
    pub async fn clean(&self) -> AlfredResult<bool> {
        let dir = self.generated_dir();
        match tokio::fs::remove_dir_all(&dir).await {
            Ok(()) => {
                tracing::info!(dir = %dir.display(), "Removed generated configs");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AlfredError::io_with_path(
                format!("Failed to remove configs directory: {}", e),
                dir.display().to_string(),
            )),
        }
    }
}
