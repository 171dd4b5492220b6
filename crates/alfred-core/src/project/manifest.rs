//! `package.json` handling

use crate::config::{PartialConfig, parse_alfred_section};
use crate::error::{AlfredError, AlfredResult};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the package manifest
pub const MANIFEST_FILE: &str = "package.json";

/// Section of the manifest a dependency belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Production,
    Development,
}

impl DependencyKind {
    /// Manifest property holding this kind of dependency
    pub fn key(&self) -> &'static str {
        match self {
            Self::Production => "dependencies",
            Self::Development => "devDependencies",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An order-preserving view of a project's `package.json`
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl PackageManifest {
    /// Wrap an already parsed manifest that lives at `path`
    pub fn from_value(path: impl Into<PathBuf>, value: Value) -> AlfredResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self {
                path: path.into(),
                fields,
            }),
            _ => Err(AlfredError::config_with_context(
                "package.json must contain a JSON object",
                MANIFEST_FILE,
            )),
        }
    }

    /// Minimal manifest for a new package
    pub fn new(path: impl Into<PathBuf>, name: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(name.to_string()));
        fields.insert("version".to_string(), Value::String("0.0.0".to_string()));
        Self {
            path: path.into(),
            fields,
        }
    }

    /// Read the manifest in `root`
    pub async fn load(root: &Path) -> AlfredResult<Self> {
        let path = root.join(MANIFEST_FILE);
        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            AlfredError::io_with_path(
                format!("Failed to read manifest: {}", e),
                path.display().to_string(),
            )
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|e| {
            AlfredError::config_with_context(
                format!("Invalid JSON in {}: {}", path.display(), e),
                MANIFEST_FILE,
            )
        })?;
        Self::from_value(path, value)
    }

    /// Write the manifest back with two-space indentation
    pub async fn save(&self) -> AlfredResult<()> {
        tokio::fs::write(&self.path, self.render()?)
            .await
            .map_err(|e| {
                AlfredError::io_with_path(
                    format!("Failed to write manifest: {}", e),
                    self.path.display().to_string(),
                )
            })?;
        tracing::debug!(path = %self.path.display(), "Saved manifest");
        Ok(())
    }

    /// Serialized manifest contents
    pub fn render(&self) -> AlfredResult<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(&self.fields)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Top-level properties in file order
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.fields.get(property)
    }

    /// The `"alfred"` section as a configuration layer
    pub fn alfred_section(&self) -> AlfredResult<PartialConfig> {
        parse_alfred_section(self.fields.get("alfred"))
    }

    /// Replace the `"alfred"` section with `section`
    pub fn set_alfred_section(&mut self, section: &PartialConfig) -> AlfredResult<()> {
        let section = serde_json::to_value(section)?;
        self.fields.insert("alfred".to_string(), section);
        Ok(())
    }

    /// Append `names` to the persisted `alfred.skills` list.
    ///
    /// Only the section stored in the manifest is touched, so values coming
    /// from the environment or the command line are never written back.
    /// Returns the names that were added.
    pub fn record_skills<S: AsRef<str>>(&mut self, names: &[S]) -> AlfredResult<Vec<String>> {
        let mut section = self.alfred_section()?;
        let mut skills = section.skills.take().unwrap_or_default();
        let mut added = Vec::new();
        for name in names {
            let name = name.as_ref();
            if !skills.iter().any(|s| s == name) {
                skills.push(name.to_string());
                added.push(name.to_string());
            }
        }
        section.skills = Some(skills);
        self.set_alfred_section(&section)?;
        Ok(added)
    }

    /// Dependencies of `kind` currently declared
    pub fn dependencies(&self, kind: DependencyKind) -> BTreeMap<String, String> {
        self.fields
            .get(kind.key())
            .and_then(Value::as_object)
            .map(|deps| {
                deps.iter()
                    .filter_map(|(name, version)| {
                        version.as_str().map(|v| (name.clone(), v.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Entries of `wanted` not yet declared under `kind`
    pub fn missing_dependencies(
        &self,
        kind: DependencyKind,
        wanted: &BTreeMap<String, String>,
    ) -> BTreeMap<String, String> {
        let current = self.fields.get(kind.key()).and_then(Value::as_object);
        wanted
            .iter()
            .filter(|(name, _)| current.is_none_or(|deps| !deps.contains_key(name.as_str())))
            .map(|(name, version)| (name.clone(), version.clone()))
            .collect()
    }

    /// Add the missing entries of `wanted` under `kind`.
    ///
    /// Existing entries are never changed. Returns the names that were added.
    pub fn add_dependencies(
        &mut self,
        kind: DependencyKind,
        wanted: &BTreeMap<String, String>,
    ) -> Vec<String> {
        let missing = self.missing_dependencies(kind, wanted);
        if missing.is_empty() {
            return Vec::new();
        }

        let entry = self
            .fields
            .entry(kind.key())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            tracing::warn!(section = kind.key(), "Replacing malformed dependency section");
            *entry = Value::Object(Map::new());
        }

        let mut added = Vec::with_capacity(missing.len());
        if let Value::Object(deps) = entry {
            for (name, version) in missing {
                deps.insert(name.clone(), Value::String(version));
                added.push(name);
            }
            sort_object(deps);
        }
        added
    }

    /// Embed `config` under `property`, returning whether anything changed
    pub fn embed(&mut self, property: &str, config: &Value) -> bool {
        if self.fields.get(property) == Some(config) {
            return false;
        }
        self.fields.insert(property.to_string(), config.clone());
        true
    }
}

fn sort_object(map: &mut Map<String, Value>) {
    let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    map.extend(entries);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest(value: Value) -> PackageManifest {
        PackageManifest::from_value("/project/package.json", value).unwrap()
    }

    fn deps(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_add_dependencies_never_downgrades() {
        let mut manifest = manifest(json!({
            "name": "app",
            "devDependencies": {"eslint": "6.0.0"}
        }));

        let added = manifest.add_dependencies(
            DependencyKind::Development,
            &deps(&[("eslint", "5.13.0"), ("babel-eslint", "10.0.1")]),
        );

        assert_eq!(added, vec!["babel-eslint"]);
        assert_eq!(
            manifest.get("devDependencies").unwrap(),
            &json!({"babel-eslint": "10.0.1", "eslint": "6.0.0"})
        );
    }

    #[test]
    fn test_missing_dependencies_diff() {
        let manifest = manifest(json!({"dependencies": {"react": "16.0.0"}}));
        let missing = manifest.missing_dependencies(
            DependencyKind::Production,
            &deps(&[("react", "16.8.1"), ("react-dom", "16.8.1")]),
        );
        assert_eq!(missing, deps(&[("react-dom", "16.8.1")]));

        let missing =
            manifest.missing_dependencies(DependencyKind::Development, &deps(&[("jest", "24")]));
        assert_eq!(missing.len(), 1);
    }

    #[test]
    fn test_embed_reports_changes() {
        let mut manifest = manifest(json!({"name": "app"}));
        assert!(manifest.embed("prettier", &json!({"singleQuote": true})));
        assert!(!manifest.embed("prettier", &json!({"singleQuote": true})));
        assert_eq!(manifest.get("prettier"), Some(&json!({"singleQuote": true})));
    }

    #[test]
    fn test_alfred_section_round_trip() {
        let mut manifest = manifest(json!({"name": "app"}));
        let section = PartialConfig {
            skills: Some(vec!["babel".to_string()]),
            show_configs: Some(true),
            ..Default::default()
        };
        manifest.set_alfred_section(&section).unwrap();

        assert_eq!(
            manifest.get("alfred"),
            Some(&json!({"skills": ["babel"], "showConfigs": true}))
        );
        assert_eq!(manifest.alfred_section().unwrap(), section);
    }

    #[test]
    fn test_record_skills_keeps_persisted_section() {
        let mut manifest = manifest(json!({
            "name": "app",
            "alfred": {"skills": ["eslint"], "npmClient": "yarn"}
        }));

        let added = manifest.record_skills(&["babel", "eslint"]).unwrap();

        assert_eq!(added, vec!["babel"]);
        assert_eq!(
            manifest.get("alfred"),
            Some(&json!({"skills": ["eslint", "babel"], "npmClient": "yarn"}))
        );
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(PackageManifest::from_value("package.json", json!([1])).is_err());
    }

    #[tokio::test]
    async fn test_load_and_save() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{"name": "app", "version": "1.0.0"}"#,
        )
        .await
        .unwrap();

        let mut manifest = PackageManifest::load(dir.path()).await.unwrap();
        assert_eq!(manifest.name(), Some("app"));
        manifest.add_dependencies(DependencyKind::Production, &deps(&[("lodash", "4.17.11")]));
        manifest.save().await.unwrap();

        let saved = tokio::fs::read_to_string(dir.path().join(MANIFEST_FILE))
            .await
            .unwrap();
        assert!(saved.starts_with("{\n  \"name\": \"app\",\n  \"version\": \"1.0.0\""));
        assert!(saved.contains("\"lodash\": \"4.17.11\""));
    }
}
