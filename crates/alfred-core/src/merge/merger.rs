//! The configurable deep merger

use super::identity::{IdentityFn, default_identity};
use super::strategy::{ConflictPolicy, MergeStrategy};
use crate::error::{AlfredError, AlfredResult};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Array fields that hold rule-like entries in bundler, compiler and linter
/// configs
const SMART_FIELDS: &[&str] = &["rules", "loaders", "plugins", "presets"];

/// Deep merger for configuration values
#[derive(Clone)]
pub struct ConfigMerger {
    rules: HashMap<String, MergeStrategy>,
    smart_fields: HashSet<String>,
    identity: IdentityFn,
    unique_fields: HashMap<String, IdentityFn>,
    conflict_policy: ConflictPolicy,
}

impl ConfigMerger {
    /// Create a merger with append semantics everywhere
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
            smart_fields: HashSet::new(),
            identity: Arc::new(default_identity),
            unique_fields: HashMap::new(),
            conflict_policy: ConflictPolicy::default(),
        }
    }

    /// Use `strategy` for `key`. The key may be a dotted path
    /// (`module.rules`) or a bare field name (`rules`).
    pub fn with_strategy(mut self, key: impl Into<String>, strategy: MergeStrategy) -> Self {
        self.rules.insert(key.into(), strategy);
        self
    }

    /// Enable smart merging on the usual rule-array fields
    pub fn smart(mut self) -> Self {
        self.smart_fields
            .extend(SMART_FIELDS.iter().map(|f| f.to_string()));
        self
    }

    /// Enable smart merging on one more field
    pub fn with_smart_field(mut self, field: impl Into<String>) -> Self {
        self.smart_fields.insert(field.into());
        self
    }

    /// Replace the identity function used by smart merging
    pub fn with_identity(mut self, identity: IdentityFn) -> Self {
        self.identity = identity;
        self
    }

    /// Keep only the first entry per identity under `field`
    pub fn with_unique(mut self, field: impl Into<String>, identity: IdentityFn) -> Self {
        self.unique_fields.insert(field.into(), identity);
        self
    }

    /// Set the policy for same-identity entries that differ in a unique field
    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    /// Strategy that applies at `path`
    pub fn strategy_for(&self, path: &[String]) -> MergeStrategy {
        if path.is_empty() {
            return MergeStrategy::Append;
        }
        self.rules
            .get(&path.join("."))
            .or_else(|| path.last().and_then(|field| self.rules.get(field)))
            .copied()
            .unwrap_or_default()
    }

    /// Merge `right` into `left`, returning a new value
    pub fn merge(&self, left: &Value, right: &Value) -> AlfredResult<Value> {
        let mut path = Vec::new();
        self.merge_at(&mut path, left, right)
    }

    /// Merge every value from left to right. An empty slice yields `{}`.
    pub fn merge_all(&self, values: &[Value]) -> AlfredResult<Value> {
        let mut iter = values.iter();
        let Some(first) = iter.next() else {
            return Ok(Value::Object(Map::new()));
        };
        iter.try_fold(first.clone(), |acc, next| self.merge(&acc, next))
    }

    fn merge_at(
        &self,
        path: &mut Vec<String>,
        left: &Value,
        right: &Value,
    ) -> AlfredResult<Value> {
        match (left, right) {
            (Value::Object(l), Value::Object(r)) => {
                if !path.is_empty() && self.strategy_for(path) == MergeStrategy::Replace {
                    return Ok(right.clone());
                }

                let mut out = l.clone();
                for (key, right_value) in r {
                    path.push(key.clone());
                    let merged = match l.get(key) {
                        Some(left_value) => self.merge_at(path, left_value, right_value)?,
                        None => match right_value {
                            Value::Array(items) => self.merge_arrays(path, &[], items)?,
                            Value::Object(_) => {
                                self.merge_at(path, &Value::Object(Map::new()), right_value)?
                            }
                            other => other.clone(),
                        },
                    };
                    path.pop();
                    out.insert(key.clone(), merged);
                }
                Ok(Value::Object(out))
            }
            (Value::Array(l), Value::Array(r)) => self.merge_arrays(path, l, r),
            (_, right) => Ok(right.clone()),
        }
    }

    fn merge_arrays(
        &self,
        path: &mut Vec<String>,
        left: &[Value],
        right: &[Value],
    ) -> AlfredResult<Value> {
        let field = path.last().map(String::as_str).unwrap_or_default();

        if let Some(identity) = self.unique_fields.get(field) {
            return self.merge_unique(field, left, right, identity);
        }

        let strategy = self.strategy_for(path);
        if strategy != MergeStrategy::Replace && self.smart_fields.contains(field) {
            return self.merge_smart(path, left, right, strategy);
        }

        let merged = match strategy {
            MergeStrategy::Append => left.iter().chain(right).cloned().collect(),
            MergeStrategy::Prepend => right.iter().chain(left).cloned().collect(),
            MergeStrategy::Replace => right.to_vec(),
        };
        Ok(Value::Array(merged))
    }

    fn merge_smart(
        &self,
        path: &mut Vec<String>,
        left: &[Value],
        right: &[Value],
        strategy: MergeStrategy,
    ) -> AlfredResult<Value> {
        let mut out: Vec<Value> = left.to_vec();
        let split = out.len();

        for entry in right {
            let existing = (self.identity)(entry).and_then(|id| {
                out.iter()
                    .position(|candidate| (self.identity)(candidate).as_deref() == Some(id.as_str()))
            });
            match existing {
                Some(idx) => {
                    let merged = self.merge_at(path, &out[idx], entry)?;
                    out[idx] = merged;
                }
                None => out.push(entry.clone()),
            }
        }

        if strategy == MergeStrategy::Prepend {
            out.rotate_left(split);
        }
        Ok(Value::Array(out))
    }

    fn merge_unique(
        &self,
        field: &str,
        left: &[Value],
        right: &[Value],
        identity: &IdentityFn,
    ) -> AlfredResult<Value> {
        let mut out: Vec<Value> = Vec::with_capacity(left.len() + right.len());
        let mut seen: HashMap<String, usize> = HashMap::new();

        for entry in left.iter().chain(right) {
            let Some(id) = identity(entry) else {
                out.push(entry.clone());
                continue;
            };
            match seen.get(&id) {
                Some(&idx) if out[idx] == *entry => {}
                Some(&idx) => match self.conflict_policy {
                    ConflictPolicy::Reject => {
                        return Err(AlfredError::merge_conflict(field, id));
                    }
                    ConflictPolicy::FirstWins => {
                        tracing::debug!(field, identity = %id, "Keeping first conflicting entry");
                    }
                    ConflictPolicy::LastWins => {
                        tracing::debug!(field, identity = %id, "Keeping last conflicting entry");
                        out[idx] = entry.clone();
                    }
                },
                None => {
                    seen.insert(id, out.len());
                    out.push(entry.clone());
                }
            }
        }

        Ok(Value::Array(out))
    }
}

impl Default for ConfigMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigMerger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut unique: Vec<&String> = self.unique_fields.keys().collect();
        unique.sort();
        f.debug_struct("ConfigMerger")
            .field("rules", &self.rules)
            .field("smart_fields", &self.smart_fields)
            .field("unique_fields", &unique)
            .field("conflict_policy", &self.conflict_policy)
            .finish()
    }
}
