//! Spreadsheet-style component labels (A, B, ..., Z, AA, AB, ...).

use super::types::{Node, NodeKind};

/// Label for the `n`-th component, 1-indexed.
///
/// `label(1) == "A"`, `label(26) == "Z"`, `label(27) == "AA"`.
pub fn label(n: usize) -> String {
    let mut letters = Vec::new();
    let mut counter = n;
    while counter > 0 {
        counter -= 1;
        letters.push(b'A' + (counter % 26) as u8);
        counter /= 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

/// Infinite sequence of labels starting at `A`.
#[derive(Debug, Clone)]
pub struct LabelSequence {
    counter: usize,
}

impl LabelSequence {
    /// Create a sequence whose first label is `A`.
    pub fn new() -> Self {
        Self { counter: 1 }
    }
}

impl Default for LabelSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for LabelSequence {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let next = label(self.counter);
        self.counter += 1;
        Some(next)
    }
}

/// Label every element of a chain in canonical pre-order.
///
/// A group takes the next label and then its branches are labeled in full,
/// one after another, before the rest of the chain continues.
pub fn assign_labels(chain: &mut Node, labels: &mut LabelSequence) {
    let mut cursor = Some(chain);
    while let Some(node) = cursor {
        node.id = labels.next().unwrap_or_default();
        for branch in branches_mut(node) {
            assign_labels(branch, labels);
        }
        cursor = node.next.as_deref_mut();
    }
}

fn branches_mut(node: &mut Node) -> &mut [Node] {
    match &mut node.kind {
        NodeKind::Parallel { branches } => branches,
        NodeKind::Series { .. } => &mut [],
    }
}
