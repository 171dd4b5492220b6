//! Target axis types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Build environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    Production,
    Development,
    Test,
}

impl Env {
    /// Every environment, in canonical order
    pub const ALL: [Env; 3] = [Env::Production, Env::Development, Env::Test];

    /// Long name, as used for `NODE_ENV`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Test => "test",
        }
    }

    /// Short name used by the `--prod`/`--dev` flags
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Production => "prod",
            Self::Development => "dev",
            Self::Test => "test",
        }
    }

    /// Resolve an environment from a long or short name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "production" | "prod" => Some(Self::Production),
            "development" | "dev" => Some(Self::Development),
            "test" => Some(Self::Test),
            _ => None,
        }
    }

    /// Resolve an environment-selecting flag such as `--prod` or `--test`
    pub fn from_flag(flag: &str) -> Option<Self> {
        flag.strip_prefix("--").and_then(Self::from_name)
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown env '{}'", s))
    }
}

/// Runtime platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Browser,
    Node,
    Electron,
    ReactNative,
}

impl Platform {
    /// Every platform, in canonical order
    pub const ALL: [Platform; 4] = [
        Platform::Browser,
        Platform::Node,
        Platform::Electron,
        Platform::ReactNative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Node => "node",
            Self::Electron => "electron",
            Self::ReactNative => "react-native",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown platform '{}'", s))
    }
}

/// Kind of project being built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Lib,
    App,
}

impl ProjectType {
    /// Every project type, in canonical order
    pub const ALL: [ProjectType; 2] = [ProjectType::Lib, ProjectType::App];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lib => "lib",
            Self::App => "app",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lib" => Ok(Self::Lib),
            "app" => Ok(Self::App),
            other => Err(format!("unknown project type '{}'", other)),
        }
    }
}

/// One concrete build target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub env: Env,
    pub platform: Platform,
    pub project_type: ProjectType,
}

impl Target {
    pub fn new(env: Env, platform: Platform, project_type: ProjectType) -> Self {
        Self {
            env,
            platform,
            project_type,
        }
    }

    /// Same target in another environment
    pub fn with_env(self, env: Env) -> Self {
        Self { env, ..self }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.env, self.platform, self.project_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_flags() {
        assert_eq!(Env::from_flag("--prod"), Some(Env::Production));
        assert_eq!(Env::from_flag("--production"), Some(Env::Production));
        assert_eq!(Env::from_flag("--dev"), Some(Env::Development));
        assert_eq!(Env::from_flag("--development"), Some(Env::Development));
        assert_eq!(Env::from_flag("--test"), Some(Env::Test));
        assert_eq!(Env::from_flag("prod"), None);
        assert_eq!(Env::from_flag("--watch"), None);
    }

    #[test]
    fn test_env_short_names_are_inverse() {
        for env in Env::ALL {
            assert_eq!(Env::from_name(env.short_name()), Some(env));
            assert_eq!(Env::from_name(env.as_str()), Some(env));
        }
    }

    #[test]
    fn test_platform_serde_names() {
        assert_eq!(
            serde_json::to_string(&Platform::ReactNative).unwrap(),
            "\"react-native\""
        );
        assert_eq!("react-native".parse::<Platform>(), Ok(Platform::ReactNative));
    }

    #[test]
    fn test_target_display_and_serde() {
        let target = Target::new(Env::Production, Platform::Node, ProjectType::App);
        assert_eq!(target.to_string(), "production/node/app");

        let json = serde_json::to_value(target).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"env": "production", "platform": "node", "projectType": "app"})
        );
    }
}
