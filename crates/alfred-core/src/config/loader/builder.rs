//! Configuration loader builder

use super::loading::load_from_source;
use super::types::ConfigSource;
use crate::config::model::AlfredConfig;
use crate::error::AlfredResult;
use std::collections::HashMap;
use std::path::Path;

/// Configuration loader with support for multiple sources
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    pub(super) sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a configuration source
    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add a `package.json` source
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    /// Add environment variables source
    pub fn with_env(self) -> Self {
        self.add_source(ConfigSource::Environment)
    }

    /// Add an explicit set of environment-style variables
    pub fn with_vars<I, K, V>(self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self.add_source(ConfigSource::Variables(vars))
    }

    /// Add command line arguments source
    pub fn with_args(self, args: HashMap<String, String>) -> Self {
        self.add_source(ConfigSource::CommandLine(args))
    }

    /// Add default configuration source
    pub fn with_defaults(self) -> Self {
        self.add_source(ConfigSource::Default)
    }

    /// Load configuration from all sources
    pub fn load(self) -> AlfredResult<AlfredConfig> {
        let mut config = AlfredConfig::default();

        for source in &self.sources {
            let layer = load_from_source(source)?;
            config.merge(layer);
        }
        tracing::debug!(skills = ?config.skills, "Loaded configuration");

        config.validate()?;
        Ok(config)
    }
}
