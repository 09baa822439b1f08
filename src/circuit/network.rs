//! The solved, labeled circuit.

use tracing::{debug, debug_span};

use super::label::{assign_labels, LabelSequence};
use super::normalize::normalize;
use super::types::{Node, Supply};
use super::validate::validate_network;
use crate::error::Result;
use crate::notation::{self, ParsedCircuit};
use crate::solver::{propagate, resolve_supply, total_resistance, SupplyTotals};

/// A fully parsed, normalized, solved and labeled circuit.
///
/// Construction either succeeds completely or fails with a single error;
/// there is no partially solved circuit. The circuit is read-only once built.
#[derive(Debug, Clone)]
pub struct Circuit {
    name: String,
    supply: Supply,
    root: Node,
    totals: SupplyTotals,
}

impl Circuit {
    /// Build a circuit from a `Name:Source:Topology` line.
    pub fn parse(input: &str) -> Result<Self> {
        let _span = debug_span!("circuit").entered();
        Self::from_parsed(notation::parse(input)?)
    }

    /// Build a circuit from an already parsed notation line.
    pub fn from_parsed(parsed: ParsedCircuit) -> Result<Self> {
        let ParsedCircuit {
            name,
            supply,
            topology,
        } = parsed;

        let mut root = normalize(topology);
        debug!(canonical = %root.structure(), "normalized topology");

        validate_network(&root)?;

        let totals = resolve_supply(supply, total_resistance(&root))?;
        propagate(&mut root, totals.intensity);

        let mut labels = LabelSequence::new();
        assign_labels(&mut root, &mut labels);
        debug!(
            components = root.pre_order().count(),
            resistance = totals.resistance,
            "solved circuit"
        );

        Ok(Self {
            name,
            supply,
            root,
            totals,
        })
    }

    /// Circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The supply as written in the notation.
    pub fn supply(&self) -> Supply {
        self.supply
    }

    /// Head of the canonical top-level chain.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total equivalent resistance (Ohms).
    pub fn resistance(&self) -> f64 {
        self.totals.resistance
    }

    /// Supply voltage (V).
    pub fn voltage(&self) -> f64 {
        self.totals.voltage
    }

    /// Supply current (A).
    pub fn intensity(&self) -> f64 {
        self.totals.intensity
    }

    /// Total delivered power (W).
    pub fn power(&self) -> f64 {
        self.totals.power
    }

    /// Every resistor and parallel group in canonical order.
    pub fn components(&self) -> Vec<&Node> {
        self.root.pre_order().collect()
    }

    /// Find a component by its label.
    pub fn find(&self, id: &str) -> Option<&Node> {
        self.root.pre_order().find(|node| node.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::NodeKind;
    use crate::error::OhmdrawError;
    use approx::assert_relative_eq;

    #[test]
    fn test_series_circuit() {
        let circuit = Circuit::parse("Circuit 1:V.12:300.150").unwrap();
        assert_eq!(circuit.name(), "Circuit 1");
        assert_relative_eq!(circuit.resistance(), 450.0, epsilon = 1e-12);
        assert_relative_eq!(circuit.intensity(), 12.0 / 450.0, epsilon = 1e-12);

        let a = circuit.find("A").unwrap();
        let b = circuit.find("B").unwrap();
        assert_relative_eq!(a.values.voltage, 12.0 * 300.0 / 450.0, epsilon = 1e-12);
        assert_relative_eq!(b.values.voltage, 12.0 * 150.0 / 450.0, epsilon = 1e-12);
        assert!(circuit.find("C").is_none());
    }

    #[test]
    fn test_group_labels_precede_branches() {
        let circuit = Circuit::parse("X:V.12:100.100:100,100;100").unwrap();
        let ids: Vec<&str> = circuit.components().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C", "D", "E", "F"]);
        assert!(matches!(circuit.find("C").unwrap().kind, NodeKind::Parallel { .. }));
        assert!(circuit.find("F").unwrap().is_series());
    }

    #[test]
    fn test_current_source() {
        let circuit = Circuit::parse("X:I.2:10,10").unwrap();
        assert_relative_eq!(circuit.resistance(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(circuit.voltage(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(circuit.power(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_shorted_branch_fails() {
        let err = Circuit::parse("X:V.12:0,100").unwrap_err();
        assert!(matches!(err, OhmdrawError::DegenerateNetwork { .. }));
    }

    #[test]
    fn test_zero_supply_fails() {
        let err = Circuit::parse("X:V.0:100").unwrap_err();
        assert!(matches!(err, OhmdrawError::InsufficientSpec { .. }));
    }
}
