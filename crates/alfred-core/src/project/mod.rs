//! Projects
//!
//! A project is a directory with a `package.json`. Its `"alfred"` section
//! names the learned skills; Alfred negotiates those skills per target and
//! writes their configs next to the sources.

mod learn;
mod manifest;
mod scaffold;
mod types;
mod writer;

pub use learn::LearnReport;
pub use manifest::{DependencyKind, MANIFEST_FILE, PackageManifest};
pub use scaffold::{ScaffoldReport, new_project};
pub use types::Project;
pub use writer::{WriteOptions, WriteReport};
