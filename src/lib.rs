//! # Ohmdraw Core
//!
//! A solver and schematic renderer for series/parallel resistor networks.
//!
//! This library provides:
//! - A compact one-line notation for resistor networks driven by a single
//!   voltage or current source
//! - Normalization of the parsed tree into a canonical form
//! - Voltage, current and power for every resistor and parallel group
//! - Spreadsheet-style component labels (A, B, ..., Z, AA, ...)
//! - Box-drawing schematics laid out on a character grid
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`notation`] - Parser for the circuit notation
//! - [`circuit`] - Network tree, normalization, validation and labeling
//! - [`solver`] - Equivalent resistance and value propagation
//! - [`schematic`] - Grid layout and text rendering
//! - [`report`] - Plain-text data table and totals
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! ohmdraw "Circuit 1:V.12:300.150"
//! ```
//!
//! ### Library
//!
//! ```
//! use ohmdraw_core::{Circuit, Schematic};
//!
//! let circuit = Circuit::parse("Circuit 1:V.12:300.150").unwrap();
//! assert_eq!(circuit.resistance(), 450.0);
//! print!("{}", Schematic::new(&circuit));
//! ```
//!
//! ## Pipeline
//!
//! 1. Parse `Name:Source:Topology` into a raw tree
//! 2. Collapse single-branch groups and flatten bare nested groups
//! 3. Reject short-circuited branches
//! 4. Derive the missing supply quantity and propagate values down the tree
//! 5. Label components in canonical pre-order
//! 6. Lay the tree out on a grid and render it

pub mod circuit;
pub mod error;
pub mod notation;
pub mod report;
pub mod schematic;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{Circuit, Node, NodeKind, Supply};
pub use error::{OhmdrawError, Result};
pub use report::{Report, ReportConfig};
pub use schematic::Schematic;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuit;
