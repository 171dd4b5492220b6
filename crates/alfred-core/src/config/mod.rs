//! Project configuration
//!
//! Alfred reads its settings from the `"alfred"` section of `package.json`,
//! from `ALFRED_*` environment variables and from command-line overrides.
//! Sources are layered by [`ConfigLoader`]; later sources win field by field.

mod args_loader;
mod env_loader;
mod file_loader;
pub mod loader;
mod model;

pub use env_loader::{load_from_env, load_from_vars};
pub use file_loader::{load_from_manifest, parse_alfred_section};
pub use loader::{ConfigLoader, ConfigSource};
pub use model::{AlfredConfig, DEFAULT_CONFIGS_DIR, NpmClient, PartialConfig};
