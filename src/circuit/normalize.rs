//! Tree rewrites that bring a freshly parsed network into canonical form.
//!
//! The parser wraps the whole topology in one implicit parallel group and
//! happily produces groups with a single branch or groups whose only content
//! is another group. Two passes clean that up:
//!
//! 1. [`collapse_single_branches`] inlines every one-branch group into the
//!    chain that contains it.
//! 2. [`flatten_nested_parallels`] splices the branches of a bare nested group
//!    (a branch that is a group with nothing after it) into its parent.
//!
//! Both passes take the chain by value and hand back the rewritten chain, so
//! the caller simply rebinds its slot to the result.

use super::types::{Node, NodeKind};

/// Run both normalization passes in order.
pub fn normalize(chain: Node) -> Node {
    flatten_nested_parallels(collapse_single_branches(chain))
}

/// Inline every parallel group that has exactly one branch.
///
/// The branch chain takes the group's place and the group's continuation is
/// appended to the branch's tail. Branches of multi-branch groups are
/// collapsed independently and never see the outer continuation.
pub fn collapse_single_branches(chain: Node) -> Node {
    let (head, rest) = chain.unlink();
    let (head, mut tail) = collapse_element(head).unlink();
    for node in rest {
        let (first, more) = collapse_element(node).unlink();
        tail.push(first);
        tail.extend(more);
    }
    Node::link(head, tail)
}

/// Collapse one detached element into the chain that replaces it.
fn collapse_element(mut node: Node) -> Node {
    if let NodeKind::Parallel { branches } = &mut node.kind {
        match <[Node; 1]>::try_from(std::mem::take(branches)) {
            Ok([only]) => return collapse_single_branches(only),
            Err(many) => *branches = many.into_iter().map(collapse_single_branches).collect(),
        }
    }
    node
}

/// Splice bare nested groups into their parent's branch list.
///
/// Each branch is flattened first, so arbitrarily deep nesting collapses
/// into a single level in one pass.
pub fn flatten_nested_parallels(chain: Node) -> Node {
    let (head, rest) = chain.unlink();
    let rest = rest.into_iter().map(flatten_element).collect();
    Node::link(flatten_element(head), rest)
}

fn flatten_element(mut node: Node) -> Node {
    if let NodeKind::Parallel { branches } = &mut node.kind {
        let mut flat = Vec::with_capacity(branches.len());
        for branch in std::mem::take(branches) {
            let mut branch = flatten_nested_parallels(branch);
            let bare = branch.next.is_none() && !branch.is_series();
            if !bare {
                flat.push(branch);
            } else if let NodeKind::Parallel { branches: inner } = &mut branch.kind {
                flat.append(inner);
            }
        }
        *branches = flat;
    }
    node
}

/// Check the canonical-form invariants on a whole tree.
///
/// No group has exactly one branch and no branch is a group without a
/// continuation.
pub fn is_canonical(chain: &Node) -> bool {
    chain.pre_order().all(|node| match &node.kind {
        NodeKind::Series { .. } => true,
        NodeKind::Parallel { branches } => {
            branches.len() != 1
                && branches
                    .iter()
                    .all(|b| !(matches!(b.kind, NodeKind::Parallel { .. }) && b.next.is_none()))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(value: f64) -> Node {
        Node::resistor(value)
    }

    fn chain(nodes: Vec<Node>) -> Node {
        Node::chain(nodes).unwrap()
    }

    #[test]
    fn test_single_branch_wrapper_is_inlined() {
        let raw = Node::parallel(vec![chain(vec![r(300.0), r(150.0)])]);
        let canonical = normalize(raw);
        assert_eq!(canonical.structure(), "(R 300)(R 150)");
        assert!(is_canonical(&canonical));
    }

    #[test]
    fn test_single_branch_keeps_continuation() {
        // 1 . {{2 . 3}} . 4
        let inner = Node::parallel(vec![chain(vec![r(2.0), r(3.0)])]);
        let raw = chain(vec![r(1.0), inner, r(4.0)]);
        let canonical = collapse_single_branches(raw);
        assert_eq!(canonical.structure(), "(R 1)(R 2)(R 3)(R 4)");
    }

    #[test]
    fn test_multi_branch_groups_are_kept() {
        let raw = Node::parallel(vec![r(100.0), r(100.0)]);
        let canonical = normalize(raw.clone());
        assert_eq!(canonical, raw);
    }

    #[test]
    fn test_nested_bare_group_is_spliced() {
        // {1, {2, 3}, 4}
        let raw = Node::parallel(vec![r(1.0), Node::parallel(vec![r(2.0), r(3.0)]), r(4.0)]);
        let canonical = normalize(raw);
        assert_eq!(canonical.structure(), "{(R 1),(R 2),(R 3),(R 4)}");
        assert!(is_canonical(&canonical));
    }

    #[test]
    fn test_nested_group_with_continuation_is_kept() {
        // {1, {2, 3} . 5}
        let mut nested = Node::parallel(vec![r(2.0), r(3.0)]);
        nested.next = Some(Box::new(r(5.0)));
        let raw = Node::parallel(vec![r(1.0), nested]);
        let canonical = normalize(raw);
        assert_eq!(canonical.structure(), "{(R 1),{(R 2),(R 3)}(R 5)}");
    }

    #[test]
    fn test_collapse_exposes_bare_group() {
        // {1, {{2, 3}}} -> single-branch wrapper disappears, then splice
        let wrapped = Node::parallel(vec![Node::parallel(vec![r(2.0), r(3.0)])]);
        let raw = Node::parallel(vec![r(1.0), wrapped]);
        let canonical = normalize(raw);
        assert_eq!(canonical.structure(), "{(R 1),(R 2),(R 3)}");
        assert!(is_canonical(&canonical));
    }

    #[test]
    fn test_long_chain_normalizes() {
        let long = chain((0..100_000).map(|_| r(1.0)).collect());
        let canonical = normalize(Node::parallel(vec![long]));
        assert!(canonical.is_series());
        assert_eq!(canonical.chain_len(), 100_000);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut nested = Node::parallel(vec![r(2.0), Node::parallel(vec![r(6.0), r(7.0)])]);
        nested.next = Some(Box::new(r(5.0)));
        let raw = Node::parallel(vec![chain(vec![r(1.0), Node::parallel(vec![nested, r(8.0)])])]);
        let once = normalize(raw);
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
        assert!(is_canonical(&once));
    }
}
