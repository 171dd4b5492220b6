//! CLI commands

pub mod clean;
pub mod learn;
pub mod new;
pub mod run;
pub mod skills;
