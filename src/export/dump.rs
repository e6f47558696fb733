//! Human-readable board dumps.
//!
//! Produces the text shown for verbose interpretation and by `inspect`.

use crate::models::{BoardModel, Lattice, LayoutGrid};
use std::fmt::Write;

/// One part of a board dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Section {
    /// Available block inventory
    Blocks,
    /// Laser sources
    Lasers,
    /// Required points
    Points,
    /// Coarse layout grid
    Layout,
    /// Expanded lattice
    Lattice,
}

impl Section {
    /// Every section in dump order.
    pub const ALL: [Self; 5] = [
        Self::Blocks,
        Self::Lasers,
        Self::Points,
        Self::Layout,
        Self::Lattice,
    ];

    /// Label printed before the section body.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blocks => "blocks",
            Self::Lasers => "lasers",
            Self::Points => "points",
            Self::Layout => "board layout",
            Self::Lattice => "playGrid",
        }
    }
}

/// Renders the body of one section, without its label.
#[must_use]
pub fn render_section(board: &BoardModel, section: Section) -> String {
    match section {
        Section::Blocks => bracketed(board.blocks.iter()),
        Section::Lasers => bracketed(board.lasers.iter()),
        Section::Points => bracketed(board.points.iter()),
        Section::Layout => render_layout(&board.layout),
        Section::Lattice => render_lattice(&board.lattice),
    }
}

/// Renders every section, one labelled block each.
///
/// ```text
/// blocks: [A02]
/// lasers: [[1, 0, 0, 1]]
/// points: [(0, 2)]
/// board layout: [[o, o], [o, o]]
/// playGrid:
/// - L - - -
/// - o - o -
/// ...
/// ```
#[must_use]
pub fn render_dump(board: &BoardModel) -> String {
    let mut output = String::new();

    for section in Section::ALL {
        let body = render_section(board, section);
        if section == Section::Lattice {
            let _ = writeln!(output, "{}:", section.label());
            output.push_str(&body);
        } else {
            let _ = writeln!(output, "{}: {}", section.label(), body);
        }
    }

    output
}

fn render_layout(layout: &LayoutGrid) -> String {
    bracketed(layout.to_token_rows().iter().map(|row| bracketed(row.iter())))
}

/// One line per lattice row, tokens separated by spaces.
#[must_use]
pub fn render_lattice(lattice: &Lattice) -> String {
    let mut output = String::new();
    for row in lattice.to_token_rows() {
        let _ = writeln!(output, "{}", row.join(" "));
    }
    output
}

fn bracketed<T: ToString>(items: impl Iterator<Item = T>) -> String {
    let parts: Vec<String> = items.map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
