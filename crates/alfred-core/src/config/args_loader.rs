//! Command line-based configuration loading

use super::env_loader::parse_bool;
use super::model::{NpmClient, PartialConfig};
use crate::error::{AlfredError, AlfredResult};
use std::collections::HashMap;

/// Load configuration overrides given on the command line.
///
/// Keys are `skills` (comma-separated), `show_configs`, `npm_client`,
/// `configs_dir` and `auto_install`; unknown keys are ignored with a warning.
pub fn load_from_args(args: &HashMap<String, String>) -> AlfredResult<PartialConfig> {
    let mut config = PartialConfig::default();

    for (key, value) in args {
        match key.as_str() {
            "skills" => {
                config.skills = Some(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect(),
                );
            }
            "show_configs" => config.show_configs = Some(parse_bool(key, value)?),
            "auto_install" => config.auto_install = Some(parse_bool(key, value)?),
            "npm_client" => {
                let client: NpmClient = value.parse().map_err(AlfredError::config)?;
                config.npm_client = Some(client);
            }
            "configs_dir" => config.configs_dir = Some(value.clone()),
            other => tracing::warn!(key = other, "Ignoring unknown config override"),
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_args() {
        let args = HashMap::from([
            ("show_configs".to_string(), "true".to_string()),
            ("configs_dir".to_string(), "build-configs".to_string()),
            ("color".to_string(), "never".to_string()),
        ]);

        let config = load_from_args(&args).unwrap();
        assert_eq!(config.show_configs, Some(true));
        assert_eq!(config.configs_dir.as_deref(), Some("build-configs"));
        assert_eq!(config.skills, None);
    }
}
