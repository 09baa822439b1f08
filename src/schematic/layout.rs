//! Mapping a canonical network tree onto the schematic grid.
//!
//! Layout runs top to bottom with one row cursor. A resistor takes one row.
//! A parallel group takes a split row, the rows of its tallest branch and a
//! merge row. Branches are given disjoint column intervals so they can be
//! laid out independently on the same rows.

use tracing::trace;

use super::cell::{Cell, Corner, Junction};
use super::grid::Grid;
use crate::circuit::{Node, NodeKind};

/// Number of grid columns a chain needs.
///
/// A resistor needs one column, a group the sum of its branches. Chain
/// elements stack vertically, so a chain is as wide as its widest element.
pub fn max_columns(chain: &Node) -> usize {
    chain
        .iter()
        .map(|node| match &node.kind {
            NodeKind::Series { .. } => 1,
            NodeKind::Parallel { branches } => branches.iter().map(max_columns).sum(),
        })
        .fold(1, usize::max)
}

/// Column used to align a glyph inside `[start, start + width)`.
pub fn midpoint(start: usize, width: usize) -> usize {
    start + width.saturating_sub(1) / 2
}

/// Spread `slack` spare columns over `gaps` inter-branch gaps.
///
/// Gaps get equal shares; leftover columns go to the earliest gaps.
pub fn distribute_gaps(slack: usize, gaps: usize) -> Vec<usize> {
    if gaps == 0 {
        return Vec::new();
    }
    let share = slack / gaps;
    let extra = slack % gaps;
    (0..gaps).map(|i| share + usize::from(i < extra)).collect()
}

/// Which connector row of a group is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Connector {
    Split,
    Merge,
}

/// Layout context: the grid under construction and the current row.
#[derive(Debug)]
pub struct Layout {
    grid: Grid,
    row: usize,
}

impl Layout {
    /// Start an empty layout with a fixed column count.
    pub fn new(columns: usize) -> Self {
        Self {
            grid: Grid::new(columns),
            row: 0,
        }
    }

    /// Row the next element will be placed on.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Place a single cell on the current row and move to the next row.
    pub fn push_row(&mut self, column: usize, cell: Cell) {
        self.grid.set(self.row, column, cell);
        self.row += 1;
    }

    /// Lay out a chain inside the column interval `[start, start + width)`.
    ///
    /// Returns with the cursor on the first row after the chain.
    pub fn place_chain(&mut self, chain: &Node, start: usize, width: usize) {
        let centre = midpoint(start, width);
        for node in chain.iter() {
            match &node.kind {
                NodeKind::Series { .. } => {
                    self.push_row(centre, Cell::Resistor(node.id.clone()));
                }
                NodeKind::Parallel { branches } => {
                    self.place_group(branches, start, width);
                }
            }
        }
    }

    fn place_group(&mut self, branches: &[Node], start: usize, width: usize) {
        let centre = midpoint(start, width);
        let widths: Vec<usize> = branches.iter().map(max_columns).collect();
        let used: usize = widths.iter().sum();
        debug_assert!(used <= width, "group needs {} columns, has {}", used, width);

        let gaps = distribute_gaps(width.saturating_sub(used), branches.len().saturating_sub(1));

        let mut starts = Vec::with_capacity(branches.len());
        let mut column = start;
        for (i, w) in widths.iter().enumerate() {
            starts.push(column);
            column += w + gaps.get(i).copied().unwrap_or(0);
        }
        let mids: Vec<usize> = starts
            .iter()
            .zip(&widths)
            .map(|(&s, &w)| midpoint(s, w))
            .collect();

        trace!(row = self.row, centre, ?mids, "placing parallel group");

        self.connector_row(centre, &mids, Connector::Split);
        self.row += 1;

        let top = self.row;
        let mut heights = Vec::with_capacity(branches.len());
        for ((branch, &s), &w) in branches.iter().zip(&starts).zip(&widths) {
            self.row = top;
            self.place_chain(branch, s, w);
            heights.push(self.row - top);
        }

        let tallest = heights.iter().copied().max().unwrap_or(0);
        for (&mid, &height) in mids.iter().zip(&heights) {
            for row in top + height..top + tallest {
                self.grid.set(row, mid, Cell::VerticalLink);
            }
        }

        self.row = top + tallest;
        self.connector_row(centre, &mids, Connector::Merge);
        self.row += 1;
    }

    /// Draw the horizontal wire joining every branch midpoint, with the
    /// group's own junction at `centre`.
    fn connector_row(&mut self, centre: usize, mids: &[usize], kind: Connector) {
        let (first, last) = match (mids.first(), mids.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return,
        };

        let tap = match kind {
            Connector::Split => Corner::Down,
            Connector::Merge => Corner::Up,
        };

        for column in first..=last {
            if column == centre {
                continue;
            }
            self.grid.set(
                self.row,
                column,
                Cell::HorizontalLink {
                    left: column != first,
                    right: column != last,
                    corner: if mids.contains(&column) { tap } else { Corner::None },
                },
            );
        }

        let junction = Junction {
            left: first < centre,
            right: last > centre,
            corner: mids.contains(&centre),
        };
        let cell = match kind {
            Connector::Split => Cell::BranchOpen(junction),
            Connector::Merge => Cell::BranchClose(junction),
        };
        self.grid.set(self.row, centre, cell);
    }

    /// Finish the layout and hand back the grid.
    pub fn finish(self) -> Grid {
        self.grid
    }
}

/// Lay out a whole circuit, bracketed by the supply's two terminals.
pub fn layout_circuit(root: &Node) -> Grid {
    let columns = max_columns(root);
    let centre = midpoint(0, columns);

    let mut layout = Layout::new(columns);
    layout.push_row(centre, Cell::VerticalLink);
    layout.place_chain(root, 0, columns);
    layout.push_row(centre, Cell::VerticalLink);
    layout.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{assign_labels, LabelSequence};

    fn labeled(mut chain: Node) -> Node {
        assign_labels(&mut chain, &mut LabelSequence::new());
        chain
    }

    fn series(values: &[f64]) -> Node {
        Node::chain(values.iter().map(|&v| Node::resistor(v)).collect()).unwrap()
    }

    #[test]
    fn test_max_columns() {
        assert_eq!(max_columns(&series(&[1.0, 2.0, 3.0])), 1);

        let group = Node::parallel(vec![series(&[1.0]), series(&[1.0, 1.0])]);
        assert_eq!(max_columns(&group), 2);

        // {1, {1, 1, 1}.1} . 1  -> widest element is 1 + 3
        let mut nested = Node::parallel(vec![Node::resistor(1.0), Node::resistor(1.0), Node::resistor(1.0)]);
        nested.next = Some(Box::new(Node::resistor(1.0)));
        let outer = Node::parallel(vec![Node::resistor(1.0), nested]);
        let chain = Node::chain(vec![outer, Node::resistor(1.0)]).unwrap();
        assert_eq!(max_columns(&chain), 4);
    }

    #[test]
    fn test_distribute_gaps() {
        assert_eq!(distribute_gaps(0, 1), vec![0]);
        assert_eq!(distribute_gaps(5, 2), vec![3, 2]);
        assert_eq!(distribute_gaps(4, 3), vec![2, 1, 1]);
        assert!(distribute_gaps(3, 0).is_empty());
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(midpoint(0, 1), 0);
        assert_eq!(midpoint(0, 2), 0);
        assert_eq!(midpoint(2, 3), 3);
        assert_eq!(midpoint(4, 4), 5);
    }

    #[test]
    fn test_series_layout() {
        let grid = layout_circuit(&labeled(series(&[300.0, 150.0])));
        assert_eq!(grid.columns(), 1);
        let codes: Vec<String> = grid.rows().iter().map(|r| r[0].mnemonic()).collect();
        assert_eq!(codes, vec!["B", "A", "B", "B"]);
    }

    #[test]
    fn test_two_branch_layout() {
        let group = Node::parallel(vec![Node::resistor(100.0), Node::resistor(100.0)]);
        let grid = layout_circuit(&labeled(group));
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.row_count(), 5);

        assert_eq!(
            grid.get(1, 0),
            Some(&Cell::BranchOpen(Junction {
                left: false,
                right: true,
                corner: true
            }))
        );
        assert_eq!(
            grid.get(1, 1),
            Some(&Cell::HorizontalLink {
                left: true,
                right: false,
                corner: Corner::Down
            })
        );
        assert_eq!(grid.get(2, 0), Some(&Cell::Resistor("B".to_string())));
        assert_eq!(grid.get(2, 1), Some(&Cell::Resistor("C".to_string())));
        assert!(matches!(grid.get(3, 0), Some(Cell::BranchClose(j)) if j.corner && j.right));
    }

    #[test]
    fn test_short_branch_is_padded() {
        // {1.1, 1.1.1}
        let group = Node::parallel(vec![series(&[1.0, 1.0]), series(&[1.0, 1.0, 1.0])]);
        let grid = layout_circuit(&labeled(group));
        // lead-in, split, 3 branch rows, merge, lead-out
        assert_eq!(grid.row_count(), 7);
        assert_eq!(grid.get(4, 0), Some(&Cell::VerticalLink));
        assert_eq!(grid.get(4, 1), Some(&Cell::Resistor("F".to_string())));
        assert!(matches!(grid.get(5, 0), Some(Cell::BranchClose(_))));
    }

    #[test]
    fn test_slack_goes_to_gaps() {
        // {1, 1} . {1, 1, 1, 1}: the first group gets four columns for two branches
        let narrow = Node::parallel(vec![Node::resistor(1.0), Node::resistor(1.0)]);
        let wide = Node::parallel(vec![
            Node::resistor(1.0),
            Node::resistor(1.0),
            Node::resistor(1.0),
            Node::resistor(1.0),
        ]);
        let grid = layout_circuit(&labeled(Node::chain(vec![narrow, wide]).unwrap()));
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.row_count(), 8);

        // branch midpoints 0 and 3, junction at 1 between them
        assert!(matches!(grid.get(1, 0), Some(Cell::HorizontalLink { left: false, right: true, corner: Corner::Down })));
        assert!(matches!(grid.get(1, 1), Some(Cell::BranchOpen(j)) if j.left && j.right && !j.corner));
        assert!(matches!(grid.get(1, 2), Some(Cell::HorizontalLink { corner: Corner::None, .. })));
        assert!(matches!(grid.get(1, 3), Some(Cell::HorizontalLink { left: true, right: false, corner: Corner::Down })));
        assert_eq!(grid.get(2, 0), Some(&Cell::Resistor("B".to_string())));
        assert_eq!(grid.get(2, 3), Some(&Cell::Resistor("C".to_string())));
        assert_eq!(grid.get(2, 1), Some(&Cell::Empty));

        // second group fills every column
        let row: Vec<String> = grid.rows()[5].iter().map(Cell::mnemonic).collect();
        assert_eq!(row, vec!["E", "F", "G", "H"]);
    }

    #[test]
    fn test_nested_group_stays_in_its_interval() {
        // {1, {1, 1} . 1}
        let mut inner = Node::parallel(vec![Node::resistor(1.0), Node::resistor(1.0)]);
        inner.next = Some(Box::new(Node::resistor(1.0)));
        let outer = Node::parallel(vec![Node::resistor(1.0), inner]);
        let grid = layout_circuit(&labeled(outer));
        assert_eq!(grid.columns(), 3);
        // outer: mids 0 and 1 (interval [1, 3) has midpoint 1), centre 1
        assert!(matches!(grid.get(1, 1), Some(Cell::BranchOpen(j)) if j.left && j.corner && !j.right));
        // inner split sits on row 2 inside columns 1..3
        assert!(matches!(grid.get(2, 1), Some(Cell::BranchOpen(j)) if j.right && j.corner));
        assert_eq!(grid.get(2, 0), Some(&Cell::Resistor("B".to_string())));
        // branch B padded while the inner group uses rows 3..=5
        assert_eq!(grid.get(3, 0), Some(&Cell::VerticalLink));
        assert_eq!(grid.get(5, 0), Some(&Cell::VerticalLink));
        assert_eq!(grid.get(5, 1), Some(&Cell::Resistor("F".to_string())));
        assert!(matches!(grid.get(6, 1), Some(Cell::BranchClose(_))));
        assert_eq!(grid.row_count(), 8);
    }
}
