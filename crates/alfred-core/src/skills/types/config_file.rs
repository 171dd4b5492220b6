//! Config fragments owned by skills

use crate::error::{AlfredError, AlfredResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a config fragment is serialized when written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// CommonJS module exporting the config
    Module,
    /// Plain JSON document
    Json,
    /// Raw text, one line per array entry
    String,
}

/// Where a config fragment ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Standalone file in the configs directory
    #[default]
    File,
    /// Embedded under a property of `package.json`
    Manifest,
    /// Kept in memory only
    Suppressed,
}

/// One named configuration artifact owned by a skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    /// Friendly name, unique within the owning skill
    pub alias: String,
    /// File name relative to the configs directory
    pub filename: String,
    pub file_type: FileType,
    pub config: Value,
    #[serde(default)]
    pub write: WriteMode,
    /// Manifest property used when embedded, defaults to the alias
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pkg_property: Option<String>,
}

impl ConfigFile {
    pub fn new(
        alias: impl Into<String>,
        filename: impl Into<String>,
        file_type: FileType,
        config: Value,
    ) -> Self {
        Self {
            alias: alias.into(),
            filename: filename.into(),
            file_type,
            config,
            write: WriteMode::File,
            pkg_property: None,
        }
    }

    /// Embed this config in `package.json` under `property`
    pub fn embedded_as(mut self, property: impl Into<String>) -> Self {
        self.write = WriteMode::Manifest;
        self.pkg_property = Some(property.into());
        self
    }

    /// Never write this config
    pub fn suppressed(mut self) -> Self {
        self.write = WriteMode::Suppressed;
        self
    }

    /// Property used when the config is embedded in the manifest
    pub fn manifest_key(&self) -> &str {
        self.pkg_property.as_deref().unwrap_or(&self.alias)
    }

    /// Serialize the config in its file format
    pub fn render(&self) -> AlfredResult<String> {
        match self.file_type {
            FileType::Module => Ok(format!(
                "module.exports = {};\n",
                serde_json::to_string_pretty(&self.config)?
            )),
            FileType::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&self.config)?)),
            FileType::String => match &self.config {
                Value::String(text) => Ok(format!("{}\n", text.trim_end())),
                Value::Array(lines) => {
                    let lines = lines
                        .iter()
                        .map(|line| {
                            line.as_str().map(str::to_string).ok_or_else(|| {
                                AlfredError::invalid_field(
                                    &self.alias,
                                    "string configs may only contain strings",
                                )
                            })
                        })
                        .collect::<AlfredResult<Vec<_>>>()?;
                    Ok(format!("{}\n", lines.join("\n")))
                }
                _ => Err(AlfredError::invalid_field(
                    &self.alias,
                    "string configs must be a string or an array of strings",
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_module() {
        let file = ConfigFile::new(
            "webpack",
            "webpack.config.js",
            FileType::Module,
            json!({"mode": "production"}),
        );
        assert_eq!(
            file.render().unwrap(),
            "module.exports = {\n  \"mode\": \"production\"\n};\n"
        );
    }

    #[test]
    fn test_render_json() {
        let file = ConfigFile::new("babel", ".babelrc", FileType::Json, json!({"presets": []}));
        assert_eq!(file.render().unwrap(), "{\n  \"presets\": []\n}\n");
    }

    #[test]
    fn test_render_string_lines() {
        let file = ConfigFile::new(
            "eslintIgnore",
            ".eslintignore",
            FileType::String,
            json!(["node_modules", "targets"]),
        );
        assert_eq!(file.render().unwrap(), "node_modules\ntargets\n");

        let bad = ConfigFile::new("x", "x", FileType::String, json!({"a": 1}));
        assert!(bad.render().is_err());
    }

    #[test]
    fn test_manifest_key() {
        let file = ConfigFile::new("prettier", ".prettierrc", FileType::Json, json!({}));
        assert_eq!(file.manifest_key(), "prettier");
        let file = file.embedded_as("prettierConfig");
        assert_eq!(file.manifest_key(), "prettierConfig");
        assert_eq!(file.write, WriteMode::Manifest);
    }
}
