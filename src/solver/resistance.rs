//! Equivalent resistance of chains and parallel groups.

use crate::circuit::{Node, NodeKind};

/// Sum of the equivalent resistances along a chain.
pub fn total_resistance(chain: &Node) -> f64 {
    chain.iter().map(element_resistance).sum()
}

/// Resistance a single element presents to its chain.
///
/// A zero-resistance branch makes the reciprocal sum infinite and the group
/// collapses to `0.0`; callers reject such networks before solving.
pub fn element_resistance(node: &Node) -> f64 {
    match &node.kind {
        NodeKind::Series { resistance } => *resistance,
        NodeKind::Parallel { branches } => {
            let conductance: f64 = branches.iter().map(|b| 1.0 / total_resistance(b)).sum();
            1.0 / conductance
        }
    }
}

/// Total resistance of branch `index` of a parallel group.
///
/// Returns `None` for resistors or an out-of-range index.
pub fn branch_resistance(node: &Node, index: usize) -> Option<f64> {
    node.branches().get(index).map(total_resistance)
}
