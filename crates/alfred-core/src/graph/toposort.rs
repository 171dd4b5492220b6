//! Depth-first topological sort
//!
//! For every edge `(u, v)` the sorted output places `u` before `v`. Nodes are
//! visited from the last input node to the first, so the same input always
//! produces the same output and independent nodes keep their input order.
//!
//! Cycles are tolerated: when a node is reached again while it is still on the
//! current visitation chain, the back edge is dropped, a warning is logged and
//! the sort carries on with the partial order it has.

use crate::error::{AlfredError, AlfredResult};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Result of a topological sort, including any back edges that were ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalOrder<T> {
    /// Every input node exactly once
    pub order: Vec<T>,
    /// Edges `(from, to)` that closed a cycle and were skipped
    pub cycles: Vec<(T, T)>,
}

impl<T> TopologicalOrder<T> {
    /// Whether the edge set contained at least one cycle
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }
}

/// Sort `nodes` so that for every edge `(u, v)`, `u` comes before `v`.
///
/// Fails with [`AlfredError::UnknownNode`] when an edge names a node that is
/// not in `nodes`.
pub fn toposort<T>(nodes: &[T], edges: &[(T, T)]) -> AlfredResult<Vec<T>>
where
    T: Clone + Eq + Hash + fmt::Display,
{
    toposort_with_report(nodes, edges).map(|sorted| sorted.order)
}

/// Same as [`toposort`], but also reports the back edges skipped to break
/// cycles.
pub fn toposort_with_report<T>(
    nodes: &[T],
    edges: &[(T, T)],
) -> AlfredResult<TopologicalOrder<T>>
where
    T: Clone + Eq + Hash + fmt::Display,
{
    // Duplicate input nodes collapse onto their first occurrence
    let mut unique: Vec<&T> = Vec::with_capacity(nodes.len());
    let mut index: HashMap<&T, usize> = HashMap::with_capacity(nodes.len());
    for node in nodes {
        if !index.contains_key(node) {
            index.insert(node, unique.len());
            unique.push(node);
        }
    }

    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); unique.len()];
    let mut seen_edges: HashSet<(usize, usize)> = HashSet::with_capacity(edges.len());
    for (from, to) in edges {
        let from_idx = *index
            .get(from)
            .ok_or_else(|| AlfredError::unknown_node(from.to_string()))?;
        let to_idx = *index
            .get(to)
            .ok_or_else(|| AlfredError::unknown_node(to.to_string()))?;
        if seen_edges.insert((from_idx, to_idx)) {
            outgoing[from_idx].push(to_idx);
        }
    }

    let mut sorter = Sorter {
        outgoing: &outgoing,
        visited: vec![false; unique.len()],
        on_chain: vec![false; unique.len()],
        post_order: Vec::with_capacity(unique.len()),
        back_edges: Vec::new(),
    };

    for i in (0..unique.len()).rev() {
        if !sorter.visited[i] {
            sorter.visit(i);
        }
    }

    let cycles: Vec<(T, T)> = sorter
        .back_edges
        .iter()
        .map(|&(from, to)| (unique[from].clone(), unique[to].clone()))
        .collect();
    for (from, to) in &cycles {
        tracing::warn!(
            from = %from,
            to = %to,
            "Cyclic dependency detected, ignoring edge {} -> {}",
            from,
            to
        );
    }

    let order = sorter
        .post_order
        .into_iter()
        .rev()
        .map(|i| unique[i].clone())
        .collect();

    Ok(TopologicalOrder { order, cycles })
}

struct Sorter<'a> {
    outgoing: &'a [Vec<usize>],
    visited: Vec<bool>,
    on_chain: Vec<bool>,
    post_order: Vec<usize>,
    back_edges: Vec<(usize, usize)>,
}

impl Sorter<'_> {
    fn visit(&mut self, node: usize) {
        self.visited[node] = true;
        self.on_chain[node] = true;

        let outgoing = self.outgoing;
        for &child in outgoing[node].iter().rev() {
            if self.on_chain[child] {
                self.back_edges.push((node, child));
                continue;
            }
            if !self.visited[child] {
                self.visit(child);
            }
        }

        self.on_chain[node] = false;
        self.post_order.push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position<T: PartialEq>(order: &[T], node: &T) -> usize {
        order.iter().position(|n| n == node).unwrap()
    }

    #[test]
    fn test_edges_are_respected() {
        let nodes = ["eslint", "babel", "react", "webpack"];
        let edges = [
            ("eslint", "babel"),
            ("babel", "react"),
            ("webpack", "babel"),
            ("webpack", "eslint"),
        ];

        let order = toposort(&nodes, &edges).unwrap();

        assert_eq!(order.len(), nodes.len());
        for (from, to) in &edges {
            assert!(position(&order, from) < position(&order, to));
        }
    }

    #[test]
    fn test_independent_nodes_keep_input_order() {
        let order = toposort(&["a", "b", "c"], &[]).unwrap();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_output_is_deterministic() {
        let nodes = [1, 2, 3, 4, 5];
        let edges = [(5, 1), (4, 2), (3, 2)];
        let first = toposort(&nodes, &edges).unwrap();
        for _ in 0..10 {
            assert_eq!(toposort(&nodes, &edges).unwrap(), first);
        }
    }

    #[test]
    fn test_unknown_node_is_rejected() {
        let err = toposort(&["a", "b"], &[("a", "c")]).unwrap_err();
        assert_eq!(
            err,
            AlfredError::UnknownNode {
                node: "c".to_string()
            }
        );
    }

    #[test]
    fn test_cycle_completes_with_warning() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let sorted = toposort_with_report(&["A", "B"], &[("A", "B"), ("B", "A")]).unwrap();

        assert_eq!(sorted.order.len(), 2);
        assert!(sorted.order.contains(&"A"));
        assert!(sorted.order.contains(&"B"));
        assert!(sorted.has_cycles());
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let sorted = toposort_with_report(&["a"], &[("a", "a")]).unwrap();
        assert_eq!(sorted.order, vec!["a"]);
        assert_eq!(sorted.cycles, vec![("a", "a")]);
    }

    #[test]
    fn test_duplicate_nodes_and_edges() {
        let order = toposort(&["a", "b", "a"], &[("b", "a"), ("b", "a")]).unwrap();
        assert_eq!(order, vec!["b", "a"]);
    }

    /// Fixed-seed linear congruential generator so failures reproduce
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            self.0 >> 33
        }

        fn below(&mut self, bound: usize) -> usize {
            (self.next() % bound as u64) as usize
        }
    }

    #[test]
    fn test_random_dags_are_sorted() {
        let mut rng = Lcg(0x5eed_a1f2);

        for _ in 0..200 {
            let count = 1 + rng.below(16);
            let nodes: Vec<u32> = (0..count as u32).collect();

            // Edges only run forward through a shuffled rank, so the graph is acyclic
            let mut rank = nodes.clone();
            for i in (1..rank.len()).rev() {
                rank.swap(i, rng.below(i + 1));
            }
            let mut edges = Vec::new();
            for i in 0..rank.len() {
                for j in (i + 1)..rank.len() {
                    if rng.below(3) == 0 {
                        edges.push((rank[i], rank[j]));
                    }
                }
            }

            let sorted = toposort_with_report(&nodes, &edges).unwrap();
            assert!(!sorted.has_cycles());

            let mut seen = sorted.order.clone();
            seen.sort_unstable();
            assert_eq!(seen, nodes);

            for (from, to) in &edges {
                assert!(
                    position(&sorted.order, from) < position(&sorted.order, to),
                    "{} should come before {} in {:?}",
                    from,
                    to,
                    sorted.order
                );
            }
        }
    }

    #[test]
    fn test_acyclic_has_no_cycles() {
        let sorted = toposort_with_report(&["x", "y"], &[("x", "y")]).unwrap();
        assert!(!sorted.has_cycles());
        assert_eq!(sorted.order, vec!["x", "y"]);
    }
}
