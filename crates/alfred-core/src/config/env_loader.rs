//! Environment variable-based configuration loading

use super::model::{NpmClient, PartialConfig};
use crate::error::{AlfredError, AlfredResult};

/// Load configuration from the process environment
pub fn load_from_env() -> AlfredResult<PartialConfig> {
    load_from_vars(std::env::vars())
}

/// Load configuration from `ALFRED_*` variables among `vars`.
///
/// - `ALFRED_SKILLS`: comma-separated skill names
/// - `ALFRED_SHOW_CONFIGS`: `true`/`false`/`1`/`0`
/// - `ALFRED_NPM_CLIENT`: `npm` or `yarn`
/// - `ALFRED_CONFIGS_DIR`: name of the configs directory
pub fn load_from_vars<I, K, V>(vars: I) -> AlfredResult<PartialConfig>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut config = PartialConfig::default();

    for (key, value) in vars {
        let value = value.as_ref();
        match key.as_ref() {
            "ALFRED_SKILLS" => {
                config.skills = Some(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect(),
                );
            }
            "ALFRED_SHOW_CONFIGS" => {
                config.show_configs = Some(parse_bool("ALFRED_SHOW_CONFIGS", value)?);
            }
            "ALFRED_NPM_CLIENT" => {
                let client: NpmClient = value.parse().map_err(AlfredError::config)?;
                config.npm_client = Some(client);
            }
            "ALFRED_CONFIGS_DIR" => {
                config.configs_dir = Some(value.to_string());
            }
            _ => {}
        }
    }

    Ok(config)
}

pub(super) fn parse_bool(name: &str, value: &str) -> AlfredResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(AlfredError::config(format!(
            "Invalid {} value '{}'",
            name, value
        ))),
    }
}
