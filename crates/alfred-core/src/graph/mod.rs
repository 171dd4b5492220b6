//! Dependency ordering
//!
//! Skill transforms must fire in dependency order. This module provides the
//! depth-first topological sort the transform pipeline is built on.

mod toposort;

pub use toposort::{TopologicalOrder, toposort, toposort_with_report};
