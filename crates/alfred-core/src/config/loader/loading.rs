//! Configuration source loading logic

use super::types::ConfigSource;
use crate::config::args_loader;
use crate::config::env_loader;
use crate::config::file_loader;
use crate::config::model::PartialConfig;
use crate::error::AlfredResult;

/// Load one configuration layer from a specific source
pub(super) fn load_from_source(source: &ConfigSource) -> AlfredResult<PartialConfig> {
    match source {
        ConfigSource::File(path) => {
            tracing::debug!("Loading config from manifest: {}", path.display());
            file_loader::load_from_manifest(path)
        }
        ConfigSource::Environment => {
            tracing::debug!("Loading config from environment");
            env_loader::load_from_env()
        }
        ConfigSource::Variables(vars) => {
            tracing::debug!("Loading config from {} variables", vars.len());
            env_loader::load_from_vars(vars.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        }
        ConfigSource::CommandLine(args) => {
            tracing::debug!("Loading config from command line");
            args_loader::load_from_args(args)
        }
        ConfigSource::Default => {
            tracing::debug!("Loading default config");
            Ok(PartialConfig::default())
        }
    }
}
