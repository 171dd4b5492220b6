//! Skill type definitions
//!
//! A skill bundles config fragments, dependencies, the tasks it implements
//! together with their hooks, and transforms keyed by peer skills.

mod config_file;
mod hook;
mod skill;
mod template;
mod transform;

pub use config_file::{ConfigFile, FileType, WriteMode};
pub use hook::{CommandHook, HookContext, SkillHook};
pub use skill::{Skill, SkillInfo};
pub use template::SkillFile;
pub use transform::{TransformContext, TransformFn};
