//! Alfred Core Library
//!
//! This crate provides the engine behind the Alfred toolchain: skill
//! registration and resolution, the config fragment merger, the transform
//! pipeline that negotiates skills per target, and the project layer that
//! writes the resulting configs and runs tasks.

pub mod config;
pub mod error;
pub mod graph;
pub mod merge;
pub mod pipeline;
pub mod project;
pub mod runner;
pub mod skills;
pub mod target;
pub mod tasks;

// Re-export commonly used types
pub use config::{AlfredConfig, ConfigLoader, NpmClient};
pub use error::{AlfredError, AlfredResult, ErrorCategory, UnifiedError, UserFriendlyError};
pub use graph::toposort;
pub use merge::{ConfigMerger, MergeStrategy};
pub use pipeline::{TransformPipeline, negotiate};
pub use project::{PackageManifest, Project, WriteOptions};
pub use runner::{RunReport, TaskRunner, TargetOutcome};
pub use skills::{Skill, SkillMap, SkillRegistry};
pub use target::{Env, Platform, ProjectType, Target, TargetSpec};
pub use tasks::Task;
