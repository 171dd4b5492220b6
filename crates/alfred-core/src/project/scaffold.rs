//! Scaffolding new projects

use super::learn::LearnReport;
use super::manifest::{MANIFEST_FILE, PackageManifest};
use super::types::Project;
use super::writer::WriteOptions;
use crate::config::AlfredConfig;
use crate::error::{AlfredError, AlfredResult};
use crate::skills::{DEFAULT_SKILLS, builtin_skill};
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const INDEX_JS: &str = "export default function add(a, b) {\n  return a + b;\n}\n";

const INDEX_SPEC_JS: &str = "import add from '../src';\n\ntest('add', () => {\n  expect(add(1, 2)).toEqual(3);\n});\n";

const GITIGNORE: &str = "node_modules\ntargets\n.configs\n";

/// Outcome of [`new_project`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    /// Files created, relative to the root
    pub files: Vec<String>,
    pub learn: LearnReport,
}

/// Create a project called `name` in `dir` with the default skills.
///
/// `dir` must not exist or be empty.
pub async fn new_project(
    dir: &Path,
    name: &str,
    options: WriteOptions,
) -> AlfredResult<(Project, ScaffoldReport)> {
    validate_package_name(name)?;
    ensure_empty(dir).await?;

    let mut manifest = PackageManifest::new(dir.join(MANIFEST_FILE), name);
    let mut scripts = serde_json::Map::new();
    for task in ["build", "start", "lint", "format", "test"] {
        scripts.insert(task.to_string(), Value::String(format!("alfred run {}", task)));
    }
    manifest.embed("main", &json!("targets/index.js"));
    manifest.embed("scripts", &Value::Object(scripts));
    manifest.save().await?;

    let mut files = vec![MANIFEST_FILE.to_string()];
    let mut seen: HashSet<String> = files.iter().cloned().collect();
    let mut templates = vec![
        ("src/index.js".to_string(), INDEX_JS.to_string()),
        ("tests/index.spec.js".to_string(), INDEX_SPEC_JS.to_string()),
        (".gitignore".to_string(), GITIGNORE.to_string()),
    ];
    templates.extend(
        DEFAULT_SKILLS
            .iter()
            .filter_map(|skill| builtin_skill(skill))
            .flat_map(|skill| skill.files)
            .map(|file| (file.path, file.contents)),
    );

    for (path, contents) in templates {
        if !seen.insert(path.clone()) {
            continue;
        }
        write_new(&dir.join(&path), &contents).await?;
        files.push(path);
    }

    let mut project = Project::from_parts(dir, manifest, AlfredConfig::default())?;
    let learn = project.learn(DEFAULT_SKILLS, options).await?;

    tracing::info!(name, root = %dir.display(), "Created project");
    let report = ScaffoldReport {
        root: dir.to_path_buf(),
        files,
        learn,
    };
    Ok((project, report))
}

fn validate_package_name(name: &str) -> AlfredResult<()> {
    let valid = !name.is_empty()
        && name.len() <= 214
        && !name.starts_with('.')
        && !name.starts_with('_')
        && name.chars().all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.' | '@' | '/')
        });
    if valid {
        Ok(())
    } else {
        Err(AlfredError::invalid_field(
            "name",
            format!("'{}' is not a valid package name", name),
        ))
    }
}

async fn ensure_empty(dir: &Path) -> AlfredResult<()> {
    match tokio::fs::read_dir(dir).await {
        Ok(mut entries) => {
            let first = entries.next_entry().await.map_err(|e| {
                AlfredError::io_with_path(e.to_string(), dir.display().to_string())
            })?;
            if first.is_some() {
                return Err(AlfredError::invalid_field(
                    "dir",
                    format!("{} already exists and is not empty", dir.display()),
                ));
            }
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                AlfredError::io_with_path(
                    format!("Failed to create project directory: {}", e),
                    dir.display().to_string(),
                )
            })
        }
        Err(e) => Err(AlfredError::io_with_path(
            e.to_string(),
            dir.display().to_string(),
        )),
    }
}

async fn write_new(path: &Path, contents: &str) -> AlfredResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await.map_err(|e| {
        AlfredError::io_with_path(
            format!("Failed to write file: {}", e),
            path.display().to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::DependencyKind;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_new_project_layout() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("my-app");

        let (project, report) = new_project(&root, "my-app", WriteOptions::default())
            .await
            .unwrap();

        for file in ["package.json", "src/index.js", "tests/index.spec.js", "src/index.html"] {
            assert!(root.join(file).exists(), "missing {}", file);
            assert!(report.files.contains(&file.to_string()));
        }
        assert_eq!(report.learn.learned, DEFAULT_SKILLS);
        assert_eq!(project.config().skills, DEFAULT_SKILLS);

        let manifest = PackageManifest::load(&root).await.unwrap();
        assert_eq!(manifest.name(), Some("my-app"));
        let dev = manifest.dependencies(DependencyKind::Development);
        assert!(dev.contains_key("webpack"));
        assert!(dev.contains_key("babel-loader"));
        assert!(manifest.get("prettier").is_some());
        assert!(root.join(".configs/webpack.config.js").exists());
    }

    #[tokio::test]
    async fn test_refuses_non_empty_dir() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(dir.path().join("README.md"), "hi").await.unwrap();

        let err = new_project(dir.path(), "app", WriteOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AlfredError::InvalidInput { .. }));
    }

    #[test]
    fn test_package_names() {
        assert!(validate_package_name("my-app").is_ok());
        assert!(validate_package_name("@scope/pkg").is_ok());
        assert!(validate_package_name("My App").is_err());
        assert!(validate_package_name("").is_err());
    }
}
