//! Build targets
//!
//! A [`Target`] is one concrete (env, platform, project type) combination.
//! Projects declare partial [`TargetSpec`]s, skills declare the [`Supports`]
//! matrix they can handle, and [`target_closure`] computes the targets the
//! pipeline iterates over.

mod closure;
mod supports;
mod types;

pub use closure::{dedupe_targets, target_closure};
pub use supports::{Supports, TargetSpec};
pub use types::{Env, Platform, ProjectType, Target};
