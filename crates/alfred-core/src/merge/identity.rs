//! Identity extraction for array de-duplication

use serde_json::Value;
use std::sync::Arc;

/// Extracts the identity of an array entry; `None` means "never a duplicate"
pub type IdentityFn = Arc<dyn Fn(&Value) -> Option<String> + Send + Sync>;

/// Object keys that name a plugin-like entry, in lookup order
const NAME_KEYS: &[&str] = &["constructor", "name"];

/// Keys that together identify a loader rule
const RULE_KEYS: &[&str] = &["test", "loader"];

/// Wrap a closure as an [`IdentityFn`]
pub fn identity_fn<F>(f: F) -> IdentityFn
where
    F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Default identity of a config entry.
///
/// - strings identify themselves (`"react"`)
/// - objects are identified by their `constructor` or `name` field (plugin
///   instances), else by `test` and `loader` together (loader rules)
/// - `[name, options]` tuples are identified by their first element
pub fn default_identity(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => {
            if let Some(name) = NAME_KEYS.iter().find_map(|key| map.get(*key)) {
                return Some(identity_text(name));
            }
            let parts: Vec<String> = RULE_KEYS
                .iter()
                .filter_map(|key| {
                    map.get(*key)
                        .map(|value| format!("{}={}", key, identity_text(value)))
                })
                .collect();
            (!parts.is_empty()).then(|| parts.join(" "))
        }
        Value::Array(items) => items.first().and_then(default_identity),
        _ => None,
    }
}

fn identity_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
