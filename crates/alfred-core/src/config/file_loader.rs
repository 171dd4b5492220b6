//! `package.json`-based configuration loading

use super::model::PartialConfig;
use crate::error::{AlfredError, AlfredResult};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load the `"alfred"` section of the manifest at `path`.
///
/// A manifest without the section yields an empty layer.
pub fn load_from_manifest(path: &Path) -> AlfredResult<PartialConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        AlfredError::io_with_path(
            format!("Failed to read manifest: {}", e),
            path.display().to_string(),
        )
    })?;

    let manifest: Value = serde_json::from_str(&content).map_err(|e| {
        AlfredError::config_with_context(
            format!("Invalid JSON in {}: {}", path.display(), e),
            "package.json",
        )
    })?;

    section_from_manifest(&manifest)
}

/// Extract the `"alfred"` section from a parsed manifest
fn section_from_manifest(manifest: &Value) -> AlfredResult<PartialConfig> {
    parse_alfred_section(manifest.get("alfred"))
}

/// Parse an `"alfred"` section; a missing section is an empty layer
pub fn parse_alfred_section(section: Option<&Value>) -> AlfredResult<PartialConfig> {
    match section {
        None | Some(Value::Null) => Ok(PartialConfig::default()),
        Some(section) => serde_json::from_value(section.clone()).map_err(|e| {
            AlfredError::config_with_context(
                format!("Invalid \"alfred\" section: {}", e),
                "package.json",
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NpmClient;
    use crate::target::Platform;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_alfred_section() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "my-app",
                "alfred": {{
                    "skills": ["babel", "react"],
                    "npmClient": "yarn",
                    "targets": [{{"platforms": ["node"], "projectTypes": ["lib"]}}]
                }}
            }}"#
        )
        .unwrap();

        let config = load_from_manifest(file.path()).unwrap();
        assert_eq!(
            config.skills,
            Some(vec!["babel".to_string(), "react".to_string()])
        );
        assert_eq!(config.npm_client, Some(NpmClient::Yarn));
        let targets = config.targets.unwrap();
        assert_eq!(targets[0].platforms, Some(vec![Platform::Node]));
    }

    #[test]
    fn test_missing_section_is_empty() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "plain"}}"#).unwrap();
        assert_eq!(
            load_from_manifest(file.path()).unwrap(),
            PartialConfig::default()
        );
    }

    #[test]
    fn test_invalid_section_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"alfred": {{"skills": "babel"}}}}"#).unwrap();
        assert!(matches!(
            load_from_manifest(file.path()),
            Err(AlfredError::Config { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_manifest(&dir.path().join("package.json")).unwrap_err();
        assert!(matches!(err, AlfredError::Io { .. }));
    }
}
