//! Writing negotiated configs to disk

use super::types::Project;
use crate::error::{AlfredError, AlfredResult};
use crate::skills::{SkillMap, WriteMode};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Options controlling how configs are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Overwrite files Alfred did not generate
    pub unsafe_overwrite: bool,
}

impl WriteOptions {
    pub fn unsafe_overwrite(mut self, value: bool) -> Self {
        self.unsafe_overwrite = value;
        self
    }
}

/// What happened to each config fragment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WriteReport {
    /// Files created or updated
    pub written: Vec<PathBuf>,
    /// Files whose content was already up to date
    pub unchanged: Vec<PathBuf>,
    /// Manifest properties holding embedded configs
    pub embedded: Vec<String>,
    /// `skill/alias` of fragments that are never written
    pub suppressed: Vec<String>,
    /// Whether `package.json` was saved
    pub manifest_changed: bool,
}

struct PlannedFile {
    path: PathBuf,
    contents: String,
    existing: Option<String>,
}

impl Project {
    /// Write the config fragments of the negotiated `skills`.
    ///
    /// `File` fragments go to [`Project::configs_dir`], `Manifest` fragments
    /// are embedded into `package.json` and `Suppressed` ones are skipped.
    /// Unless `unsafe_overwrite` is set, nothing is written when a file
    /// outside the generated directory would be replaced with new content.
    pub async fn write_configs(
        &mut self,
        skills: &SkillMap,
        options: WriteOptions,
    ) -> AlfredResult<WriteReport> {
        let dir = self.configs_dir();
        let generated = dir.starts_with(self.generated_dir());
        let mut report = WriteReport::default();
        let mut planned = Vec::new();
        let mut embeds = Vec::new();

        for skill in skills {
            for config in &skill.configs {
                match config.write {
                    WriteMode::Suppressed => {
                        report
                            .suppressed
                            .push(format!("{}/{}", skill.name, config.alias));
                    }
                    WriteMode::Manifest => {
                        embeds.push((config.manifest_key(), &config.config));
                    }
                    WriteMode::File => {
                        let path = dir.join(&config.filename);
                        let existing = read_existing(&path).await?;
                        planned.push(PlannedFile {
                            path,
                            contents: config.render()?,
                            existing,
                        });
                    }
                }
            }
        }

        if !generated && !options.unsafe_overwrite {
            if let Some(conflict) = planned
                .iter()
                .find(|p| p.existing.as_ref().is_some_and(|e| *e != p.contents))
            {
                return Err(refuse_overwrite(conflict.path.display()));
            }
        }

        // package.json is always user-owned
        if !options.unsafe_overwrite {
            if let Some((key, _)) = embeds.iter().find(|(key, config)| {
                self.manifest
                    .get(key)
                    .is_some_and(|current| current != *config)
            }) {
                return Err(refuse_overwrite(format!(
                    "{}#{}",
                    self.manifest.path().display(),
                    key
                )));
            }
        }

        for (key, config) in embeds {
            if self.manifest.embed(key, config) {
                report.manifest_changed = true;
            }
            report.embedded.push(key.to_string());
        }

        for file in planned {
            if file.existing.as_deref() == Some(file.contents.as_str()) {
                report.unchanged.push(file.path);
                continue;
            }
            write_file(&file.path, &file.contents).await?;
            tracing::debug!(path = %file.path.display(), "Wrote config");
            report.written.push(file.path);
        }

        if report.manifest_changed {
            self.manifest.save().await?;
        }

        tracing::info!(
            written = report.written.len(),
            unchanged = report.unchanged.len(),
            embedded = report.embedded.len(),
            "Configs written"
        );
        Ok(report)
    }
}

fn refuse_overwrite(target: impl std::fmt::Display) -> AlfredError {
    AlfredError::config_with_context(
        format!("Refusing to overwrite {}; pass --unsafe to replace it", target),
        "write_configs",
    )
}

async fn read_existing(path: &Path) -> AlfredResult<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AlfredError::io_with_path(
            format!("Failed to read existing config: {}", e),
            path.display().to_string(),
        )),
    }
}

async fn write_file(path: &Path, contents: &str) -> AlfredResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            AlfredError::io_with_path(
                format!("Failed to create directory: {}", e),
                parent.display().to_string(),
            )
        })?;
    }
    tokio::fs::write(path, contents).await.map_err(|e| {
        AlfredError::io_with_path(
            format!("Failed to write config: {}", e),
            path.display().to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlfredConfig;
    use crate::project::PackageManifest;
    use serde_json::json;
    use tempfile::TempDir;

    async fn project(dir: &TempDir, skills: &[&str], show_configs: bool) -> Project {
        let root = dir.path();
        tokio::fs::write(root.join("package.json"), r#"{"name": "app"}"#)
            .await
            .unwrap();
        let manifest = PackageManifest::load(root).await.unwrap();
        Project::from_parts(
            root,
            manifest,
            AlfredConfig {
                skills: skills.iter().map(|s| s.to_string()).collect(),
                show_configs,
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_writes_each_fragment_by_mode() {
        let dir = TempDir::new().unwrap();
        let mut project = project(&dir, &["eslint", "prettier", "parcel"], false).await;
        let skills = project.negotiate(project.default_target()).unwrap();

        let report = project
            .write_configs(&skills, WriteOptions::default())
            .await
            .unwrap();

        let configs = dir.path().join(".configs");
        assert_eq!(
            report.written,
            vec![configs.join(".eslintrc.json"), configs.join(".eslintignore")]
        );
        assert_eq!(report.embedded, vec!["prettier"]);
        assert_eq!(report.suppressed, vec!["parcel/parcel"]);
        assert!(report.manifest_changed);

        let manifest = PackageManifest::load(dir.path()).await.unwrap();
        assert_eq!(
            manifest.get("prettier"),
            Some(&json!({"singleQuote": true, "trailingComma": "es5"}))
        );
        assert!(!dir.path().join(".parcelrc").exists());
    }

    #[tokio::test]
    async fn test_second_write_is_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut project = project(&dir, &["babel"], false).await;
        let skills = project.negotiate(project.default_target()).unwrap();

        project
            .write_configs(&skills, WriteOptions::default())
            .await
            .unwrap();
        let report = project
            .write_configs(&skills, WriteOptions::default())
            .await
            .unwrap();

        assert!(report.written.is_empty());
        assert_eq!(report.unchanged.len(), 1);
    }

    #[tokio::test]
    async fn test_refuses_to_overwrite_user_files() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(dir.path().join(".babelrc"), "{\"presets\": [\"mine\"]}\n")
            .await
            .unwrap();
        let mut project = project(&dir, &["babel"], true).await;
        let skills = project.negotiate(project.default_target()).unwrap();

        let err = project
            .write_configs(&skills, WriteOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AlfredError::Config { .. }));
        let kept = tokio::fs::read_to_string(dir.path().join(".babelrc"))
            .await
            .unwrap();
        assert!(kept.contains("mine"));

        let report = project
            .write_configs(&skills, WriteOptions::default().unsafe_overwrite(true))
            .await
            .unwrap();
        assert_eq!(report.written, vec![dir.path().join(".babelrc")]);
    }

    #[tokio::test]
    async fn test_refuses_to_replace_user_manifest_property() {
        let dir = TempDir::new().unwrap();
        let mut project = project(&dir, &["prettier"], false).await;
        tokio::fs::write(
            dir.path().join("package.json"),
            r#"{"name": "app", "prettier": {"semi": false, "printWidth": 120}}"#,
        )
        .await
        .unwrap();
        project.manifest = PackageManifest::load(dir.path()).await.unwrap();
        let skills = project.negotiate(project.default_target()).unwrap();

        let err = project
            .write_configs(&skills, WriteOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AlfredError::Config { .. }));

        let user = json!({"semi": false, "printWidth": 120});
        assert_eq!(project.manifest().get("prettier"), Some(&user));
        let saved = PackageManifest::load(dir.path()).await.unwrap();
        assert_eq!(saved.get("prettier"), Some(&user));

        let report = project
            .write_configs(&skills, WriteOptions::default().unsafe_overwrite(true))
            .await
            .unwrap();
        assert!(report.manifest_changed);
        let saved = PackageManifest::load(dir.path()).await.unwrap();
        assert_eq!(
            saved.get("prettier"),
            Some(&json!({"singleQuote": true, "trailingComma": "es5"}))
        );
    }

    #[tokio::test]
    async fn test_clean_removes_generated_dir() {
        let dir = TempDir::new().unwrap();
        let mut project = project(&dir, &["babel"], false).await;
        let skills = project.negotiate(project.default_target()).unwrap();
        project
            .write_configs(&skills, WriteOptions::default())
            .await
            .unwrap();

        assert!(project.clean().await.unwrap());
        assert!(!dir.path().join(".configs").exists());
        assert!(!project.clean().await.unwrap());
    }
}
