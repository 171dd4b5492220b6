//! Config fragment merging
//!
//! Skills contribute partial configuration values that have to be combined
//! into one coherent configuration. Values are `serde_json::Value` trees; the
//! merger never mutates its inputs.
//!
//! # Semantics
//!
//! - Objects: keys are unioned, right-hand scalars override left-hand ones.
//! - Arrays: concatenated, left elements first (the `append` strategy).
//! - Per-key strategies (`append`, `prepend`, `replace`) are looked up by the
//!   full dotted path first and then by the last path segment.
//! - Smart mode de-duplicates entries of rule-like arrays by identity and
//!   merges matching entries instead of repeating them.
//! - Unique fields keep only the first entry per identity and apply a
//!   [`ConflictPolicy`] when two entries share an identity but differ.
//!
//! # Example
//!
//! ```rust
//! use alfred_core::merge::{ConfigMerger, MergeStrategy};
//! use serde_json::json;
//!
//! let merger = ConfigMerger::new().with_strategy("entry", MergeStrategy::Replace);
//! let merged = merger
//!     .merge(&json!({"entry": ["a.js"]}), &json!({"entry": ["b.js"]}))
//!     .unwrap();
//! assert_eq!(merged, json!({"entry": ["b.js"]}));
//! ```

mod identity;
mod merger;
mod multiple;
mod strategy;

pub use identity::{IdentityFn, default_identity, identity_fn};
pub use merger::ConfigMerger;
pub use strategy::{ConflictPolicy, MergeStrategy};

use crate::error::AlfredResult;
use serde_json::Value;

/// Merge any number of values with the default append semantics
pub fn merge(values: &[Value]) -> AlfredResult<Value> {
    ConfigMerger::new().merge_all(values)
}

/// Merge groups of named configs, producing one value per top-level key
pub fn merge_multiple(values: &[Value]) -> AlfredResult<Vec<Value>> {
    ConfigMerger::new().merge_multiple(values)
}
