//! Box-drawing schematics of resistor networks.
//!
//! The layout engine maps a canonical, labeled tree onto a [`Grid`] of
//! [`Cell`]s. Rendering turns the grid into aligned text, three lines per
//! grid row:
//!
//! ```text
//!  │
//! ╔╧╗
//! ║A║
//! ╚╤╝
//! ╔╧╗
//! ║B║
//! ╚╤╝
//!  │
//! ```

mod cell;
mod grid;
mod layout;

pub use cell::{Cell, Corner, Junction};
pub use grid::Grid;
pub use layout::{distribute_gaps, layout_circuit, max_columns, midpoint, Layout};

use std::fmt;

use tracing::debug;

use crate::circuit::Circuit;

/// The laid-out schematic of one circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schematic {
    grid: Grid,
}

impl Schematic {
    /// Lay out a solved and labeled circuit.
    pub fn new(circuit: &Circuit) -> Self {
        let _span = tracing::debug_span!("schematic", circuit = circuit.name()).entered();
        let grid = layout_circuit(circuit.root());
        debug!(columns = grid.columns(), rows = grid.row_count(), "laid out schematic");
        Self { grid }
    }

    /// The underlying cell grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of grid columns (the circuit's widest parallel fan-out).
    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Rendered multi-line text.
    pub fn render(&self) -> String {
        self.grid.render()
    }
}

impl fmt::Display for Schematic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
