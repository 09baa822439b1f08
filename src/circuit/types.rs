//! Core types for the resistor network tree.

use std::fmt;

/// Electrical quantities computed for a single element of the network.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Electrical {
    /// Voltage drop across the element (V)
    pub voltage: f64,
    /// Current through the element (A)
    pub intensity: f64,
    /// Dissipated power (W)
    pub power: f64,
}

/// The two kinds of element a chain can contain.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A single resistor
    Series {
        /// Resistance in ohms
        resistance: f64,
    },
    /// A parallel group. Each branch is the head of its own chain.
    Parallel {
        /// Branch heads in notation order
        branches: Vec<Node>,
    },
}

/// One element of a chain, owning whatever follows it in series.
///
/// `Clone`, `PartialEq`, `Debug` and `Drop` walk the `next` links in a loop,
/// so stack depth depends on group nesting only, never on chain length.
pub struct Node {
    /// Resistor or parallel group
    pub kind: NodeKind,
    /// Label assigned after solving (empty until then)
    pub id: String,
    /// Quantities filled in by the solver
    pub values: Electrical,
    /// Next element in the same series context
    pub next: Option<Box<Node>>,
}

impl Node {
    /// Create an unlabeled resistor with no electrical values yet.
    pub fn resistor(resistance: f64) -> Self {
        Self {
            kind: NodeKind::Series { resistance },
            id: String::new(),
            values: Electrical::default(),
            next: None,
        }
    }

    /// Create an unlabeled parallel group from its branch heads.
    pub fn parallel(branches: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Parallel { branches },
            id: String::new(),
            values: Electrical::default(),
            next: None,
        }
    }

    /// Link a sequence of elements into a single chain.
    ///
    /// Returns `None` for an empty sequence. Any existing `next` on the
    /// elements is overwritten.
    pub fn chain(elements: Vec<Node>) -> Option<Node> {
        let mut elements = elements.into_iter();
        let head = elements.next()?;
        Some(Self::link(head, elements.collect()))
    }

    /// Link `rest` after `head`, replacing whatever `head` was linked to.
    pub fn link(mut head: Node, rest: Vec<Node>) -> Node {
        head.next = rest.into_iter().rev().fold(None, |next, mut node| {
            node.next = next;
            Some(Box::new(node))
        });
        head
    }

    /// Split a chain into its head and the detached elements after it.
    pub fn unlink(mut self) -> (Node, Vec<Node>) {
        let mut rest = Vec::new();
        let mut cursor = self.next.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
            rest.push(*node);
        }
        (self, rest)
    }

    /// Check if this element is a single resistor.
    pub fn is_series(&self) -> bool {
        matches!(self.kind, NodeKind::Series { .. })
    }

    /// Branch heads of a parallel group (empty for a resistor).
    pub fn branches(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Parallel { branches } => branches,
            NodeKind::Series { .. } => &[],
        }
    }

    /// Iterate over this element and everything after it in series.
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter { cursor: Some(self) }
    }

    /// Iterate over the whole subtree in canonical order: an element,
    /// then each of its branches in full, then the rest of its chain.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Number of elements in this chain (not counting branch contents).
    pub fn chain_len(&self) -> usize {
        self.iter().count()
    }

    fn clone_element(&self) -> Node {
        Node {
            kind: self.kind.clone(),
            id: self.id.clone(),
            values: self.values,
            next: None,
        }
    }

    fn same_element(&self, other: &Node) -> bool {
        self.kind == other.kind && self.id == other.id && self.values == other.values
    }

    /// Compact structural form, e.g. `(R 100){(R 1),(R 2)}(R 5)`.
    pub fn structure(&self) -> String {
        let mut out = String::new();
        for node in self.iter() {
            match &node.kind {
                NodeKind::Series { resistance } => {
                    out.push_str(&format!("(R {})", resistance));
                }
                NodeKind::Parallel { branches } => {
                    let inner: Vec<String> = branches.iter().map(Node::structure).collect();
                    out.push('{');
                    out.push_str(&inner.join(","));
                    out.push('}');
                }
            }
        }
        out
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        let rest = self.iter().skip(1).map(Node::clone_element).collect();
        Node::link(self.clone_element(), rest)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let (mut lhs, mut rhs) = (self.iter(), other.iter());
        loop {
            match (lhs.next(), rhs.next()) {
                (Some(a), Some(b)) if a.same_element(b) => {}
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut cursor = self.next.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

/// Debug view of a single element, without its `next` link.
struct Element<'a>(&'a Node);

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.0.kind)
            .field("id", &self.0.id)
            .field("values", &self.0.values)
            .finish()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(Element)).finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Series { resistance } => write!(
                f,
                "Resistor {} ({} Ohms, {} V, {} A, {} W)",
                self.id, resistance, self.values.voltage, self.values.intensity, self.values.power
            ),
            NodeKind::Parallel { branches } => write!(
                f,
                "Branch {} ({} branches, {} V, {} A, {} W)",
                self.id,
                branches.len(),
                self.values.voltage,
                self.values.intensity,
                self.values.power
            ),
        }
    }
}

/// Iterator over the elements of one chain.
pub struct ChainIter<'a> {
    cursor: Option<&'a Node>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(node)
    }
}

/// Canonical pre-order iterator over a whole tree.
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(next) = node.next.as_deref() {
            self.stack.push(next);
        }
        self.stack.extend(node.branches().iter().rev());
        Some(node)
    }
}

/// How the circuit is driven.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Supply {
    /// Voltage source of the given magnitude (V)
    Voltage(f64),
    /// Current source of the given magnitude (A)
    Current(f64),
}

impl Supply {
    /// Magnitude of the source regardless of kind.
    pub fn magnitude(&self) -> f64 {
        match self {
            Supply::Voltage(v) | Supply::Current(v) => *v,
        }
    }
}

impl fmt::Display for Supply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Supply::Voltage(v) => write!(f, "V.{}", v),
            Supply::Current(i) => write!(f, "I.{}", i),
        }
    }
}
