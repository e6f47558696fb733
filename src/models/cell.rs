//! Cell tokens of the layout grid and the expanded lattice.

use crate::models::BlockKind;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One cell of the coarse layout grid.
///
/// Holds the token exactly as written. `x` marks a cell where no block may
/// be placed, `o` a free cell, and a block letter a block already fixed in
/// place; any other single character is kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(char);

impl Cell {
    /// Wraps a raw token.
    #[must_use]
    pub const fn new(token: char) -> Self {
        Self(token)
    }

    /// The token as written in the board file.
    #[must_use]
    pub const fn token(self) -> char {
        self.0
    }

    /// Block type fixed in this cell, if the token is a block letter.
    #[must_use]
    pub fn fixed_block(self) -> Option<BlockKind> {
        BlockKind::from_letter(self.0)
    }
}

impl FromStr for Cell {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(token), None) => Ok(Self::new(token)),
            _ => Err(format!("cell token '{s}' is not a single character")),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One position of the expanded lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LatticeToken {
    /// `-`: an edge or corner between cells
    #[default]
    Edge,
    /// A cell center carrying its layout token
    Cell(Cell),
    /// `L`: a laser origin
    Laser,
    /// `P`: a required intersection point
    Point,
}

impl LatticeToken {
    /// Single-character token.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Edge => '-',
            Self::Cell(cell) => cell.token(),
            Self::Laser => 'L',
            Self::Point => 'P',
        }
    }
}

impl From<Cell> for LatticeToken {
    fn from(cell: Cell) -> Self {
        Self::Cell(cell)
    }
}

impl fmt::Display for LatticeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl Serialize for LatticeToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_keep_tokens_as_written() {
        for token in ["x", "X", "o", "O", "A", "b", "D", "2"] {
            let cell: Cell = token.parse().unwrap();
            assert_eq!(cell.to_string(), token);
        }
    }

    #[test]
    fn test_cell_tokens_are_single_characters() {
        assert!("oo".parse::<Cell>().is_err());
        assert!("".parse::<Cell>().is_err());
    }

    #[test]
    fn test_fixed_block() {
        assert_eq!(Cell::new('B').fixed_block(), Some(BlockKind::Opaque));
        assert_eq!(Cell::new('c').fixed_block(), Some(BlockKind::Refract));
        assert_eq!(Cell::new('o').fixed_block(), None);
        assert_eq!(Cell::new('x').fixed_block(), None);
    }

    #[test]
    fn test_lattice_tokens() {
        assert_eq!(LatticeToken::default().to_string(), "-");
        assert_eq!(LatticeToken::Laser.to_string(), "L");
        assert_eq!(LatticeToken::Point.to_string(), "P");
        assert_eq!(LatticeToken::from(Cell::new('O')).to_string(), "O");
    }

    #[test]
    fn test_serialize_as_strings() {
        let json =
            serde_json::to_string(&vec![LatticeToken::Edge, Cell::new('x').into()]).unwrap();
        assert_eq!(json, r#"["-","x"]"#);
    }
}
