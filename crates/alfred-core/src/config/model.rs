//! Configuration model

use crate::error::{AlfredError, AlfredResult};
use crate::target::TargetSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Directory generated configs are written to, relative to the project root
pub const DEFAULT_CONFIGS_DIR: &str = ".configs";

/// Package manager used for the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NpmClient {
    #[default]
    Npm,
    Yarn,
}

impl fmt::Display for NpmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Npm => write!(f, "npm"),
            Self::Yarn => write!(f, "yarn"),
        }
    }
}

impl FromStr for NpmClient {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            other => Err(format!("unknown npm client '{}'", other)),
        }
    }
}

/// Resolved Alfred configuration of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlfredConfig {
    /// Skills the project has learned
    pub skills: Vec<String>,
    /// Write configs to the project root instead of the configs directory
    pub show_configs: bool,
    /// Declared targets; empty means the default browser app
    pub targets: Vec<TargetSpec>,
    pub npm_client: NpmClient,
    /// Name of the generated configs directory
    pub configs_dir: String,
    /// Install dependencies after learning skills
    pub auto_install: bool,
}

impl Default for AlfredConfig {
    fn default() -> Self {
        Self {
            skills: Vec::new(),
            show_configs: false,
            targets: Vec::new(),
            npm_client: NpmClient::default(),
            configs_dir: DEFAULT_CONFIGS_DIR.to_string(),
            auto_install: false,
        }
    }
}

/// One configuration layer; unset fields leave the lower layers alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_configs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<TargetSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm_client: Option<NpmClient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configs_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_install: Option<bool>,
}

impl AlfredConfig {
    /// Apply a layer on top of this configuration
    pub fn merge(&mut self, layer: PartialConfig) {
        if let Some(skills) = layer.skills {
            self.skills = skills;
        }
        if let Some(show_configs) = layer.show_configs {
            self.show_configs = show_configs;
        }
        if let Some(targets) = layer.targets {
            self.targets = targets;
        }
        if let Some(npm_client) = layer.npm_client {
            self.npm_client = npm_client;
        }
        if let Some(configs_dir) = layer.configs_dir {
            self.configs_dir = configs_dir;
        }
        if let Some(auto_install) = layer.auto_install {
            self.auto_install = auto_install;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> AlfredResult<()> {
        let mut seen = HashSet::new();
        for skill in &self.skills {
            if skill.trim().is_empty() {
                return Err(AlfredError::config("Skill names cannot be empty"));
            }
            if !seen.insert(skill.as_str()) {
                return Err(AlfredError::config_with_context(
                    format!("Skill '{}' is listed more than once", skill),
                    "alfred.skills",
                ));
            }
        }

        if let Some(position) = self.targets.iter().position(TargetSpec::is_empty) {
            return Err(AlfredError::config_with_context(
                format!("Target {} declares an axis with no values", position),
                "alfred.targets",
            ));
        }

        let dir = self.configs_dir.trim();
        if dir.is_empty() || dir.contains("..") {
            return Err(AlfredError::config(format!(
                "Invalid configs directory '{}'",
                self.configs_dir
            )));
        }

        Ok(())
    }
}
