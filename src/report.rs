//! Plain-text report of a solved circuit.
//!
//! Combines the schematic, a per-component data table in canonical order and
//! the circuit totals.

use std::fmt::{self, Write};

use crate::circuit::{Circuit, NodeKind};
use crate::schematic::Schematic;

/// Default number of decimals printed for electrical quantities.
pub const DEFAULT_PRECISION: usize = 2;

/// Configuration for report output.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Maximum number of decimals (trailing zeros are trimmed).
    pub precision: usize,
    /// Include the box-drawing schematic.
    pub show_schematic: bool,
    /// Include the per-component data table and totals.
    pub show_table: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            show_schematic: true,
            show_table: true,
        }
    }
}

impl ReportConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of printed decimals.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Include or omit the schematic.
    pub fn with_schematic(mut self, show: bool) -> Self {
        self.show_schematic = show;
        self
    }

    /// Include or omit the data table and totals.
    pub fn with_table(mut self, show: bool) -> Self {
        self.show_table = show;
        self
    }
}

/// Format a quantity with at most `precision` decimals, e.g. `0.03` or `450`.
pub fn format_quantity(value: f64, precision: usize) -> String {
    let mut s = format!("{:.*}", precision, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// A printable report of one circuit.
pub struct Report<'a> {
    circuit: &'a Circuit,
    config: ReportConfig,
}

impl<'a> Report<'a> {
    /// Create a report for a solved circuit.
    pub fn new(circuit: &'a Circuit, config: ReportConfig) -> Self {
        Self { circuit, config }
    }

    /// One line per component, in canonical order.
    pub fn data_table(&self) -> String {
        let p = self.config.precision;
        let mut out = String::from("####Data Table####\n");

        for node in self.circuit.components() {
            let v = &node.values;
            let line = match &node.kind {
                NodeKind::Series { resistance } => format!(
                    "Resistor {}: Resistance: {} Ohms. Voltage: {} V. Intensity: {} A. Power: {} W.",
                    node.id,
                    format_quantity(*resistance, p),
                    format_quantity(v.voltage, p),
                    format_quantity(v.intensity, p),
                    format_quantity(v.power, p),
                ),
                NodeKind::Parallel { branches } => {
                    let heads: Vec<&str> = branches.iter().map(|b| b.id.as_str()).collect();
                    format!(
                        "Branch {}: Branches: {{{}}}. Total Resistance: {} Ohms. Total Voltage: {} V. Total Intensity: {} A. Total Power: {} W.",
                        node.id,
                        heads.join(", "),
                        format_quantity(crate::solver::element_resistance(node), p),
                        format_quantity(v.voltage, p),
                        format_quantity(v.intensity, p),
                        format_quantity(v.power, p),
                    )
                }
            };
            out.push_str(&line);
            out.push('\n');
        }

        out
    }

    /// Circuit-level totals block.
    pub fn totals(&self) -> String {
        let p = self.config.precision;
        let c = self.circuit;
        format!(
            "Total circuit data:\nTotal Resistance: {} Ohms\nTotal Voltage: {} V\nTotal Intensity: {} A\nTotal Power: {} W\n",
            format_quantity(c.resistance(), p),
            format_quantity(c.voltage(), p),
            format_quantity(c.intensity(), p),
            format_quantity(c.power(), p),
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schematic = Schematic::new(self.circuit);

        let mut out = String::new();
        writeln!(out, "Name: {}", self.circuit.name())?;
        writeln!(out)?;

        if self.config.show_schematic {
            writeln!(out, "Columns: {}", schematic.columns())?;
            writeln!(out, "Drawing:")?;
            writeln!(out)?;
            out.push_str(&schematic.render());
            writeln!(out)?;
        }

        if self.config.show_table {
            out.push_str(&self.data_table());
            writeln!(out)?;
            out.push_str(&self.totals());
        }

        f.write_str(&out)
    }
}
