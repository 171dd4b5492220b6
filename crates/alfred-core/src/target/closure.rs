//! Target closure computation

use super::supports::{Supports, TargetSpec};
use super::types::Target;
use std::collections::HashSet;

/// Targets the pipeline iterates over.
///
/// Every target declared by the project (or the default browser app when it
/// declares none) that at least one skill's `supports` matrix reaches. When
/// no skill declares a matrix, the declared targets are returned as is.
pub fn target_closure(specs: &[TargetSpec], supports: &[&Supports]) -> Vec<Target> {
    let declared: Vec<Target> = if specs.is_empty() {
        TargetSpec::default_project().expand()
    } else {
        specs.iter().flat_map(TargetSpec::expand).collect()
    };
    let declared = dedupe_targets(declared);

    if supports.is_empty() {
        return declared;
    }

    declared
        .into_iter()
        .filter(|target| supports.iter().any(|s| s.includes(target)))
        .collect()
}

/// Drop repeated targets, keeping first occurrences in order
pub fn dedupe_targets(targets: impl IntoIterator<Item = Target>) -> Vec<Target> {
    let mut seen = HashSet::new();
    targets
        .into_iter()
        .filter(|target| seen.insert(*target))
        .collect()
}
