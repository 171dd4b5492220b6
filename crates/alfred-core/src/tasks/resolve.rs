//! Default skill resolution

use crate::error::{AlfredError, AlfredResult};
use crate::skills::Skill;
use crate::target::Target;

/// Choose one skill among `candidates` for `target`.
///
/// Candidates whose capability matrix excludes the target are dropped. No
/// remaining candidate yields `None`; a single one is returned as is; among
/// several, exactly one must be flagged `default`.
pub fn resolve_default_skill<'a>(
    subcommand: &str,
    candidates: &[&'a Skill],
    target: &Target,
) -> AlfredResult<Option<&'a Skill>> {
    let supported: Vec<&'a Skill> = candidates
        .iter()
        .copied()
        .filter(|skill| skill.supports_target(target))
        .collect();

    match supported.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(*only)),
        many => {
            let defaults: Vec<&'a Skill> = many.iter().copied().filter(|s| s.default).collect();
            match defaults.as_slice() {
                [chosen] => Ok(Some(*chosen)),
                [] => Err(AlfredError::ambiguous_default(
                    subcommand,
                    target,
                    many.iter().map(|s| s.name.clone()).collect(),
                )),
                flagged => Err(AlfredError::ambiguous_default(
                    subcommand,
                    target,
                    flagged.iter().map(|s| s.name.clone()).collect(),
                )),
            }
        }
    }
}
