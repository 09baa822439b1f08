//! Network validation.

use crate::error::{OhmdrawError, Result};
use crate::solver::total_resistance;

use super::types::{Node, NodeKind};

/// Validate a canonical network before solving.
///
/// Checks:
/// - Every parallel group has at least two branches
/// - No parallel branch is a short circuit (zero total resistance)
/// - No parallel branch overflows to an infinite total resistance
/// - Every resistance is finite and non-negative
pub fn validate_network(chain: &Node) -> Result<()> {
    for node in chain.pre_order() {
        match &node.kind {
            NodeKind::Series { resistance } => {
                if !resistance.is_finite() || *resistance < 0.0 {
                    return Err(OhmdrawError::degenerate(format!(
                        "resistance {} is not a finite non-negative value",
                        resistance
                    )));
                }
            }
            NodeKind::Parallel { branches } => {
                if branches.len() < 2 {
                    return Err(OhmdrawError::degenerate(format!(
                        "parallel group {} has fewer than two branches",
                        node.structure()
                    )));
                }
                for (index, branch) in branches.iter().enumerate() {
                    let resistance = total_resistance(branch);
                    if resistance == 0.0 {
                        return Err(OhmdrawError::degenerate(format!(
                            "branch {} of parallel group {} is a short circuit",
                            index + 1,
                            node.structure()
                        )));
                    }
                    if !resistance.is_finite() {
                        return Err(OhmdrawError::degenerate(format!(
                            "branch {} of parallel group {} has a non-finite resistance",
                            index + 1,
                            node.structure()
                        )));
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorted_branch_is_degenerate() {
        let group = Node::parallel(vec![Node::resistor(0.0), Node::resistor(5.0)]);
        let chain = Node::chain(vec![Node::resistor(1.0), group]).unwrap();
        let err = validate_network(&chain).unwrap_err();
        assert!(matches!(err, OhmdrawError::DegenerateNetwork { .. }));
    }

    #[test]
    fn test_overflowing_branch_is_degenerate() {
        let branch = || Node::chain(vec![Node::resistor(1e308), Node::resistor(1e308)]).unwrap();
        let group = Node::parallel(vec![branch(), branch()]);
        let err = validate_network(&group).unwrap_err();
        assert!(matches!(err, OhmdrawError::DegenerateNetwork { .. }));
    }

    #[test]
    fn test_zero_resistor_in_series_is_allowed() {
        let chain = Node::chain(vec![Node::resistor(0.0), Node::resistor(5.0)]).unwrap();
        assert!(validate_network(&chain).is_ok());
    }

    #[test]
    fn test_branch_with_partial_zero_is_allowed() {
        let branch = Node::chain(vec![Node::resistor(0.0), Node::resistor(2.0)]).unwrap();
        let group = Node::parallel(vec![branch, Node::resistor(2.0)]);
        assert!(validate_network(&group).is_ok());
    }
}
