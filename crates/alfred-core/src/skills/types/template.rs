//! Template files contributed by skills

use serde::{Deserialize, Serialize};

/// A file written into a freshly scaffolded project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillFile {
    /// Path relative to the project root
    pub path: String,
    pub contents: String,
}

impl SkillFile {
    pub fn new(path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}
