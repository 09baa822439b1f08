//! Drawing cells and their box-drawing glyphs.
//!
//! Every cell renders as three text lines of a caller-supplied width. The
//! vertical wire always runs through the cell's midpoint column
//! `(width - 1) / 2`, which keeps stacked cells aligned.

/// Connector flags of a split or merge junction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Junction {
    /// A horizontal wire leaves to the left
    pub left: bool,
    /// A horizontal wire leaves to the right
    pub right: bool,
    /// A branch starts (split) or ends (merge) straight below/above
    pub corner: bool,
}

/// Vertical tap on a horizontal wire segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Corner {
    /// Plain horizontal run
    #[default]
    None,
    /// Tap going up (a branch arrives from above)
    Up,
    /// Tap going down (a branch leaves downwards)
    Down,
}

/// One cell of the schematic grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cell {
    /// Nothing drawn
    #[default]
    Empty,
    /// Straight vertical wire
    VerticalLink,
    /// Point where a chain splits into parallel branches
    BranchOpen(Junction),
    /// Point where parallel branches merge back into one chain
    BranchClose(Junction),
    /// Horizontal wire segment between branch taps
    HorizontalLink {
        left: bool,
        right: bool,
        corner: Corner,
    },
    /// A resistor box carrying its label
    Resistor(String),
}

impl Cell {
    /// Minimum display width of this cell in characters.
    pub fn width(&self) -> usize {
        match self {
            Cell::Empty => 0,
            Cell::Resistor(label) => 2 + label.chars().count(),
            _ => 1,
        }
    }

    /// Render the cell as three lines, each exactly `width` characters wide.
    ///
    /// `width` must be at least [`Cell::width`].
    pub fn draw(&self, width: usize) -> [String; 3] {
        match self {
            Cell::Empty => [blank(width), blank(width), blank(width)],
            Cell::VerticalLink => {
                let wire = centered('│', width);
                [wire.clone(), wire.clone(), wire]
            }
            Cell::BranchOpen(j) => [
                centered('│', width),
                rail(j.left, split_glyph(*j), j.right, width),
                if j.corner { centered('│', width) } else { blank(width) },
            ],
            Cell::BranchClose(j) => [
                if j.corner { centered('│', width) } else { blank(width) },
                rail(j.left, merge_glyph(*j), j.right, width),
                centered('│', width),
            ],
            Cell::HorizontalLink {
                left,
                right,
                corner,
            } => [
                if *corner == Corner::Up { centered('│', width) } else { blank(width) },
                rail(*left, link_glyph(*left, *right, *corner), *right, width),
                if *corner == Corner::Down { centered('│', width) } else { blank(width) },
            ],
            Cell::Resistor(label) => draw_resistor(label, width),
        }
    }

    /// Short code used by [`crate::schematic::Grid::debug_table`].
    pub fn mnemonic(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::VerticalLink => "B".to_string(),
            Cell::BranchOpen(j) => format!("S{}", if j.corner { "v" } else { "" }),
            Cell::BranchClose(j) => format!("M{}", if j.corner { "^" } else { "" }),
            Cell::HorizontalLink { corner, .. } => match corner {
                Corner::None => "H".to_string(),
                Corner::Up => "H^".to_string(),
                Corner::Down => "Hv".to_string(),
            },
            Cell::Resistor(label) => label.clone(),
        }
    }
}

fn midpos(width: usize) -> usize {
    width.saturating_sub(1) / 2
}

fn blank(width: usize) -> String {
    " ".repeat(width)
}

fn centered(glyph: char, width: usize) -> String {
    let mid = midpos(width);
    let mut s = " ".repeat(mid);
    s.push(glyph);
    s.push_str(&" ".repeat(width.saturating_sub(mid + 1)));
    s
}

fn rail(left: bool, glyph: char, right: bool, width: usize) -> String {
    let mid = midpos(width);
    let mut s = if left { "─".repeat(mid) } else { " ".repeat(mid) };
    s.push(glyph);
    let rest = width.saturating_sub(mid + 1);
    s.push_str(&if right { "─".repeat(rest) } else { " ".repeat(rest) });
    s
}

fn split_glyph(j: Junction) -> char {
    match (j.left, j.right, j.corner) {
        (true, true, true) => '┼',
        (true, true, false) => '┴',
        (true, false, true) => '┤',
        (true, false, false) => '┘',
        (false, true, true) => '├',
        (false, true, false) => '└',
        (false, false, true) => '│',
        (false, false, false) => '?',
    }
}

fn merge_glyph(j: Junction) -> char {
    match (j.left, j.right, j.corner) {
        (true, true, true) => '┼',
        (true, true, false) => '┬',
        (true, false, true) => '┤',
        (true, false, false) => '┐',
        (false, true, true) => '├',
        (false, true, false) => '┌',
        (false, false, true) => '│',
        (false, false, false) => '?',
    }
}

fn link_glyph(left: bool, right: bool, corner: Corner) -> char {
    match (left, right, corner) {
        (true, true, Corner::Up) => '┴',
        (true, true, Corner::Down) => '┬',
        (true, false, Corner::Up) => '┘',
        (true, false, Corner::Down) => '┐',
        (false, true, Corner::Up) => '└',
        (false, true, Corner::Down) => '┌',
        (true, _, Corner::None) | (_, true, Corner::None) => '─',
        (false, false, Corner::Up | Corner::Down) => '│',
        (false, false, Corner::None) => '?',
    }
}

fn draw_resistor(label: &str, width: usize) -> [String; 3] {
    let mid = midpos(width);
    let left = "═".repeat(mid.saturating_sub(1));
    let right = "═".repeat(width.saturating_sub(mid + 2));
    [
        format!("╔{left}╧{right}╗"),
        format!("║{:<pad$}║", label, pad = width.saturating_sub(2)),
        format!("╚{left}╤{right}╝"),
    ]
}
