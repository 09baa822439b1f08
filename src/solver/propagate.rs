//! Supply resolution and voltage/current propagation.

use tracing::debug;

use crate::circuit::{Node, NodeKind, Supply};
use crate::error::{OhmdrawError, Result};

use super::resistance::{element_resistance, total_resistance};

/// Circuit-level quantities derived from the supply and total resistance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupplyTotals {
    /// Total equivalent resistance (Ohms)
    pub resistance: f64,
    /// Supply voltage (V)
    pub voltage: f64,
    /// Supply current (A)
    pub intensity: f64,
    /// Delivered power (W)
    pub power: f64,
}

/// Derive the missing supply quantity with Ohm's law.
///
/// A voltage source needs a non-zero total resistance to define a current.
/// The total resistance and every derived quantity must be finite.
pub fn resolve_supply(supply: Supply, resistance: f64) -> Result<SupplyTotals> {
    if !resistance.is_finite() {
        return Err(OhmdrawError::degenerate(format!(
            "total resistance {} Ohms is not finite",
            resistance
        )));
    }

    let (voltage, intensity) = match supply {
        Supply::Voltage(v) if v > 0.0 => {
            if resistance <= 0.0 {
                return Err(OhmdrawError::degenerate(format!(
                    "a {} V source across a zero-resistance network draws infinite current",
                    v
                )));
            }
            (v, v / resistance)
        }
        Supply::Current(i) if i > 0.0 => (i * resistance, i),
        other => {
            return Err(OhmdrawError::insufficient(format!(
                "supply '{}' must be a positive voltage or current",
                other
            )));
        }
    };

    let power = voltage * intensity;
    if !(voltage.is_finite() && intensity.is_finite() && power.is_finite()) {
        return Err(OhmdrawError::degenerate(format!(
            "supply '{}' across {} Ohms overflows (V = {}, I = {}, P = {})",
            supply, resistance, voltage, intensity, power
        )));
    }

    debug!(resistance, voltage, intensity, "resolved supply");

    Ok(SupplyTotals {
        resistance,
        voltage,
        intensity,
        power,
    })
}

/// Assign voltage, current and power to every element of a chain.
///
/// `current` is the current entering the chain. It is shared by every
/// element of the chain and split across the branches of each group.
///
/// Only branches are descended into recursively; the chain itself is walked
/// in a loop.
pub fn propagate(chain: &mut Node, current: f64) {
    let mut cursor = Some(chain);
    while let Some(node) = cursor {
        let resistance = element_resistance(node);
        let voltage = current * resistance;
        node.values.intensity = current;
        node.values.voltage = voltage;
        node.values.power = voltage * current;

        if let NodeKind::Parallel { branches } = &mut node.kind {
            for branch in branches.iter_mut() {
                let branch_current = voltage / total_resistance(branch);
                propagate(branch, branch_current);
            }
        }

        cursor = node.next.as_deref_mut();
    }
}
