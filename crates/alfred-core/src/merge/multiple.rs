//! Merging of named config groups
//!
//! Each input is an object of named groups (`{"client": {...}, "server":
//! {...}}`). The output holds one merged value per distinct group name, in
//! the order the names were first seen.

use super::merger::ConfigMerger;
use crate::error::{AlfredError, AlfredResult};
use serde_json::Value;

impl ConfigMerger {
    /// Merge groups of named configs into one value per group
    pub fn merge_multiple(&self, values: &[Value]) -> AlfredResult<Vec<Value>> {
        let mut names: Vec<&String> = Vec::new();
        for (position, value) in values.iter().enumerate() {
            let groups = value.as_object().ok_or_else(|| {
                AlfredError::invalid_field(
                    format!("configs[{}]", position),
                    "expected an object of named config groups",
                )
            })?;
            for name in groups.keys() {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }

        names
            .into_iter()
            .map(|name| {
                let group: Vec<Value> = values
                    .iter()
                    .filter_map(|value| value.get(name.as_str()).cloned())
                    .collect();
                self.merge_all(&group)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_multiple_replaces_per_group() {
        let merged = ConfigMerger::new()
            .merge_multiple(&[
                json!({"client": {"entry": "./client.js"}, "server": {"entry": "./server.js"}}),
                json!({"client": {"entry": "./replaced.js"}}),
            ])
            .unwrap();

        assert_eq!(
            merged,
            vec![json!({"entry": "./replaced.js"}), json!({"entry": "./server.js"})]
        );
    }

    #[test]
    fn test_merge_multiple_keeps_discovery_order() {
        let merged = ConfigMerger::new()
            .merge_multiple(&[
                json!({"b": {"x": [1]}}),
                json!({"a": {"y": 1}, "b": {"x": [2]}}),
            ])
            .unwrap();

        assert_eq!(merged, vec![json!({"x": [1, 2]}), json!({"y": 1})]);
    }

    #[test]
    fn test_merge_multiple_rejects_non_objects() {
        let err = ConfigMerger::new()
            .merge_multiple(&[json!({"a": {}}), json!([1, 2])])
            .unwrap_err();
        assert!(matches!(err, AlfredError::InvalidInput { .. }));
    }
}
