use super::*;
use crate::config::{DEFAULT_CONFIGS_DIR, NpmClient};
use crate::error::AlfredError;
use std::collections::HashMap;
use std::fs;

#[test]
fn test_defaults_only() {
    let config = ConfigLoader::new().with_defaults().load().unwrap();
    assert!(config.skills.is_empty());
    assert_eq!(config.configs_dir, DEFAULT_CONFIGS_DIR);
    assert_eq!(config.npm_client, NpmClient::Npm);
}

#[test]
fn test_later_sources_override_earlier() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("package.json");
    fs::write(
        &manifest,
        r#"{"alfred": {"skills": ["babel"], "npmClient": "yarn", "showConfigs": false}}"#,
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_defaults()
        .with_file(&manifest)
        .with_vars([("ALFRED_SHOW_CONFIGS", "true")])
        .with_args(HashMap::from([(
            "skills".to_string(),
            "babel,eslint".to_string(),
        )]))
        .load()
        .unwrap();

    assert_eq!(config.skills, vec!["babel", "eslint"]);
    assert!(config.show_configs);
    assert_eq!(config.npm_client, NpmClient::Yarn);
}

#[test]
fn test_load_validates() {
    let err = ConfigLoader::new()
        .with_vars([("ALFRED_SKILLS", "babel,babel")])
        .load()
        .unwrap_err();
    assert!(matches!(err, AlfredError::Config { .. }));
}
