//! Series/parallel network solver.
//!
//! This module computes equivalent resistances and spreads the supply's
//! voltage and current over a canonical network tree.
//!
//! ## Method
//!
//! A chain of elements behaves like one resistor whose value is the sum of
//! its elements. A parallel group presents
//!
//! ```text
//! R_eq = 1 / (1/R_1 + 1/R_2 + ... + 1/R_n)
//! ```
//!
//! where each `R_i` is the total resistance of branch `i`. Once the total
//! circuit current is known, [`propagate`] walks the tree once:
//!
//! - a resistor carries the chain current `I` and drops `I * R`
//! - a parallel group drops `V = I * R_eq` and hands `V / R_i` to branch `i`
//! - the current leaving a group is the current that entered it

mod propagate;
mod resistance;

pub use propagate::{propagate, resolve_supply, SupplyTotals};
pub use resistance::{branch_resistance, element_resistance, total_resistance};
