//! Skills
//!
//! A skill contributes config fragments, dependencies and task
//! implementations to a project. Skills cooperate through pairwise
//! transforms keyed by the name of a peer skill.
//!
//! # Built-in Skills
//!
//! | Skill | Tasks | Default |
//! |-------|-------|---------|
//! | `babel` | | |
//! | `eslint` | lint | yes |
//! | `prettier` | format | yes |
//! | `react` | | |
//! | `jest` | test | yes |
//! | `mocha` | test | |
//! | `webpack` | build, start | yes |
//! | `parcel` | build, start | |
//! | `lodash` | | |

pub mod registry;
pub mod types;

pub use registry::{
    BUILTIN_SKILLS, DEFAULT_SKILLS, SkillMap, SkillRegistry, builtin_skill, builtin_skills,
    resolve_in,
};
pub use types::{
    CommandHook, ConfigFile, FileType, HookContext, Skill, SkillFile, SkillHook, SkillInfo,
    TransformContext, TransformFn, WriteMode,
};
