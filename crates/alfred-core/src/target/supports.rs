//! Capability matrices and declared target specs

use super::types::{Env, Platform, ProjectType, Target};
use serde::{Deserialize, Serialize};

/// The (env, platform, project type) combinations a skill can handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supports {
    pub envs: Vec<Env>,
    pub platforms: Vec<Platform>,
    pub project_types: Vec<ProjectType>,
}

impl Supports {
    /// Every env, platform and project type
    pub fn all() -> Self {
        Self {
            envs: Env::ALL.to_vec(),
            platforms: Platform::ALL.to_vec(),
            project_types: ProjectType::ALL.to_vec(),
        }
    }

    /// Every env, restricted platforms and project types
    pub fn new(platforms: &[Platform], project_types: &[ProjectType]) -> Self {
        Self {
            envs: Env::ALL.to_vec(),
            platforms: platforms.to_vec(),
            project_types: project_types.to_vec(),
        }
    }

    /// Restrict the environments
    pub fn with_envs(mut self, envs: &[Env]) -> Self {
        self.envs = envs.to_vec();
        self
    }

    /// Whether `target` lies inside this matrix
    pub fn includes(&self, target: &Target) -> bool {
        self.envs.contains(&target.env)
            && self.platforms.contains(&target.platform)
            && self.project_types.contains(&target.project_type)
    }
}

/// A partial target matrix declared by a project.
///
/// A missing axis stands for every value of that axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envs: Option<Vec<Env>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<Platform>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_types: Option<Vec<ProjectType>>,
}

impl TargetSpec {
    /// Spec used when a project declares no targets: a browser app
    pub fn default_project() -> Self {
        Self {
            envs: None,
            platforms: Some(vec![Platform::Browser]),
            project_types: Some(vec![ProjectType::App]),
        }
    }

    pub fn with_platforms(mut self, platforms: &[Platform]) -> Self {
        self.platforms = Some(platforms.to_vec());
        self
    }

    pub fn with_project_types(mut self, project_types: &[ProjectType]) -> Self {
        self.project_types = Some(project_types.to_vec());
        self
    }

    pub fn with_envs(mut self, envs: &[Env]) -> Self {
        self.envs = Some(envs.to_vec());
        self
    }

    /// Whether some axis was declared with no values at all
    pub fn is_empty(&self) -> bool {
        [
            self.envs.as_ref().map(Vec::is_empty),
            self.platforms.as_ref().map(Vec::is_empty),
            self.project_types.as_ref().map(Vec::is_empty),
        ]
        .into_iter()
        .flatten()
        .any(|empty| empty)
    }

    /// Cartesian product of the declared axes
    pub fn expand(&self) -> Vec<Target> {
        let envs = self.envs.clone().unwrap_or_else(|| Env::ALL.to_vec());
        let platforms = self
            .platforms
            .clone()
            .unwrap_or_else(|| Platform::ALL.to_vec());
        let project_types = self
            .project_types
            .clone()
            .unwrap_or_else(|| ProjectType::ALL.to_vec());

        let mut targets = Vec::with_capacity(envs.len() * platforms.len() * project_types.len());
        for &env in &envs {
            for &platform in &platforms {
                for &project_type in &project_types {
                    targets.push(Target::new(env, platform, project_type));
                }
            }
        }
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_includes() {
        let supports = Supports::new(&[Platform::Browser], &[ProjectType::App]);
        assert!(supports.includes(&Target::new(
            Env::Test,
            Platform::Browser,
            ProjectType::App
        )));
        assert!(!supports.includes(&Target::new(
            Env::Test,
            Platform::Node,
            ProjectType::App
        )));
    }

    #[test]
    fn test_spec_expand_missing_axes_mean_all() {
        let spec = TargetSpec::default().with_platforms(&[Platform::Node]);
        let targets = spec.expand();
        assert_eq!(targets.len(), 3 * 2);
        assert!(targets.iter().all(|t| t.platform == Platform::Node));
    }

    #[test]
    fn test_spec_is_empty() {
        assert!(!TargetSpec::default().is_empty());
        assert!(TargetSpec::default().with_platforms(&[]).is_empty());
    }

    #[test]
    fn test_spec_deserializes_camel_case() {
        let spec: TargetSpec = serde_json::from_value(serde_json::json!({
            "platforms": ["node"],
            "projectTypes": ["lib"]
        }))
        .unwrap();
        assert_eq!(spec.envs, None);
        assert_eq!(spec.project_types, Some(vec![ProjectType::Lib]));
    }
}
