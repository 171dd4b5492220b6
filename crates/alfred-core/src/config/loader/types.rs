//! Configuration source types

use std::collections::HashMap;
use std::path::PathBuf;

/// Source of configuration data
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// The `"alfred"` section of a `package.json`
    File(PathBuf),
    /// `ALFRED_*` variables of the process environment
    Environment,
    /// An explicit set of variables, read like the environment
    Variables(Vec<(String, String)>),
    /// Overrides given on the command line
    CommandLine(HashMap<String, String>),
    /// Default configuration
    Default,
}
