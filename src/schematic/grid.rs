//! Dense row/column grid of drawing cells.

use super::cell::Cell;

/// A rectangular grid of [`Cell`]s.
///
/// The column count is fixed at construction; rows are added on demand as
/// layout proceeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create an empty grid with a fixed number of columns.
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows created so far.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Cell at `(row, column)`, if inside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Grow the grid so that `row` exists.
    pub fn ensure_row(&mut self, row: usize) {
        while self.rows.len() <= row {
            self.rows.push(vec![Cell::Empty; self.columns]);
        }
    }

    /// Store a cell, growing the grid downwards if needed.
    pub fn set(&mut self, row: usize, column: usize, cell: Cell) {
        debug_assert!(
            column < self.columns,
            "column {} outside a {}-column grid",
            column,
            self.columns
        );
        self.ensure_row(row);
        if let Some(slot) = self.rows[row].get_mut(column) {
            *slot = cell;
        }
    }

    /// Widest cell in each column.
    pub fn column_widths(&self) -> Vec<usize> {
        (0..self.columns)
            .map(|c| self.rows.iter().map(|row| row[c].width()).max().unwrap_or(0))
            .collect()
    }

    /// Render the grid as text.
    ///
    /// Each row becomes three lines. Each column is as wide as its widest
    /// cell, so every line has the same width.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        for row in &self.rows {
            let drawn: Vec<[String; 3]> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| cell.draw(width))
                .collect();

            for line in 0..3 {
                for cell in &drawn {
                    out.push_str(&cell[line]);
                }
                out.push('\n');
            }
        }

        out
    }

    /// Boxed table of cell mnemonics, for inspecting layouts.
    pub fn debug_table(&self) -> String {
        let inner = (self.columns * 5).saturating_sub(1);
        let rule = "─".repeat(inner);
        let mut out = format!("┌{}┐\n", rule);

        for row in &self.rows {
            out.push('│');
            for cell in row {
                out.push_str(&format!("{:<4}│", cell.mnemonic()));
            }
            out.push('\n');
            out.push_str(&format!("├{}┤\n", rule));
        }

        out
    }
}
