//! Transform pipeline
//!
//! Negotiates the skills of a project for one target: every skill applies
//! its transforms keyed by peers that are present, after those peers have
//! themselves been negotiated. Each applied skill yields a fresh
//! [`SkillMap`] snapshot.

use crate::error::{AlfredError, AlfredResult};
use crate::graph::toposort_with_report;
use crate::skills::{SkillMap, TransformContext, TransformFn};
use crate::target::Target;

/// Applies pairwise skill transforms in dependency order
#[derive(Debug, Clone, Copy)]
pub struct TransformPipeline {
    target: Target,
}

impl TransformPipeline {
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Order in which skills apply their transforms.
    ///
    /// A skill with a transform keyed by a present peer comes after that
    /// peer. Cycles are broken with a warning.
    pub fn application_order(skills: &SkillMap) -> AlfredResult<Vec<String>> {
        let nodes: Vec<String> = skills.iter().map(|s| s.name.clone()).collect();
        let edges: Vec<(String, String)> = skills
            .iter()
            .flat_map(|skill| {
                skill
                    .transform_peers()
                    .filter(move |peer| skills.contains(peer))
                    .map(move |peer| (skill.name.clone(), peer.to_string()))
            })
            .collect();

        let sorted = toposort_with_report(&nodes, &edges)?;
        let mut order = sorted.order;
        order.reverse();
        Ok(order)
    }

    /// Negotiate `skills`, returning the final snapshot
    pub fn negotiate(&self, skills: &SkillMap) -> AlfredResult<SkillMap> {
        let mut current = skills.clone();

        for name in Self::application_order(skills)? {
            let Some(skill) = current.get(&name) else {
                continue;
            };
            let transforms: Vec<(String, TransformFn)> = skill
                .transforms
                .iter()
                .filter(|(peer, _)| current.contains(peer))
                .map(|(peer, transform)| (peer.clone(), transform.clone()))
                .collect();
            if transforms.is_empty() {
                continue;
            }

            let mut negotiated = skill.clone();
            for (peer_name, transform) in transforms {
                let Some(peer) = current.get(&peer_name) else {
                    continue;
                };
                let ctx = TransformContext {
                    peer,
                    skills: &current,
                    target: self.target,
                };
                negotiated = transform(negotiated, &ctx)?;
                if negotiated.name != name {
                    return Err(AlfredError::invalid_field(
                        format!("{}.transforms.{}", name, peer_name),
                        format!("transform renamed the skill to '{}'", negotiated.name),
                    ));
                }
                tracing::debug!(
                    skill = %name,
                    peer = %peer_name,
                    target = %self.target,
                    "Applied transform"
                );
            }

            current = current.with_skill(negotiated)?;
        }

        Ok(current)
    }
}

/// Negotiate `skills` for `target`
pub fn negotiate(skills: &SkillMap, target: Target) -> AlfredResult<SkillMap> {
    TransformPipeline::new(target).negotiate(skills)
}
