//! Skill registry
//!
//! Holds the skills and tasks of a project and answers which single skill
//! runs a task for a given target.

mod builtins;
mod lookup;
mod skill_map;
mod types;


pub use builtins::{BUILTIN_SKILLS, DEFAULT_SKILLS, builtin_skill, builtin_skills};
pub use lookup::resolve_in;
pub use skill_map::SkillMap;
pub use types::SkillRegistry;
