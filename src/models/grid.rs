//! The coarse layout grid and its expanded lattice.
//!
//! A layout of `R` rows by `C` columns expands to a lattice of `2R+1` rows by
//! `2C+1` columns. Layout cell `(row, col)` lands on lattice position
//! `(2*row+1, 2*col+1)`; every other lattice position is an edge between
//! cells, which is where lasers travel and where points sit.

use crate::error::BoardError;
use crate::models::{Cell, LatticeToken, Point};
use serde::Serialize;
use std::ops::Index;

/// Rectangular grid of layout cells, as written between the grid markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LayoutGrid {
    rows: Vec<Vec<Cell>>,
}

impl LayoutGrid {
    /// Builds a grid, checking that it has at least one row and that every
    /// row is as wide as the first.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let Some(first) = rows.first() else {
            return Err(BoardError::malformed_grid("grid section contains no rows"));
        };

        let width = first.len();
        if width == 0 {
            return Err(BoardError::malformed_grid("grid row 1 is empty"));
        }

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(BoardError::malformed_grid(format!(
                "grid row {} has {} cells, expected {} like row 1",
                idx + 1,
                row.len(),
                width
            )));
        }

        Ok(Self { rows })
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Rows in file order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Whether some row holds exactly these tokens, compared as written.
    pub fn has_row_matching<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        self.rows.iter().any(|row| {
            row.len() == tokens.len()
                && row
                    .iter()
                    .zip(tokens)
                    .all(|(cell, token)| cell_matches_token(*cell, token.as_ref()))
        })
    }

    /// Rows as strings, one string per cell.
    #[must_use]
    pub fn to_token_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }
}

fn cell_matches_token(cell: Cell, token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some(cell.token()) && chars.next().is_none()
}

impl Index<usize> for LayoutGrid {
    type Output = [Cell];

    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row]
    }
}

/// The expanded play lattice (`playGrid`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Lattice {
    rows: Vec<Vec<LatticeToken>>,
}

impl Lattice {
    /// Expands a layout grid: edges everywhere, layout cells at odd/odd
    /// positions.
    #[must_use]
    pub fn from_layout(layout: &LayoutGrid) -> Self {
        let height = 2 * layout.height() + 1;
        let width = 2 * layout.width() + 1;
        let mut rows = vec![vec![LatticeToken::Edge; width]; height];

        for (row, cells) in layout.rows().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                rows[2 * row + 1][2 * col + 1] = LatticeToken::Cell(*cell);
            }
        }

        Self { rows }
    }

    /// Number of lattice rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of lattice columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Token at `point`, or `None` when outside the lattice.
    #[must_use]
    pub fn get(&self, point: Point) -> Option<LatticeToken> {
        self.slot(point).map(|(row, col)| self.rows[row][col])
    }

    /// Overwrites the token at `point`. Returns `false` (and changes nothing)
    /// when the point is outside the lattice.
    pub fn mark(&mut self, point: Point, token: LatticeToken) -> bool {
        match self.slot(point) {
            Some((row, col)) => {
                self.rows[row][col] = token;
                true
            }
            None => false,
        }
    }

    /// Rows top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<LatticeToken>] {
        &self.rows
    }

    /// Rows rendered as strings, one string per token.
    #[must_use]
    pub fn to_token_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }

    fn slot(&self, point: Point) -> Option<(usize, usize)> {
        let row = usize::try_from(point.y).ok()?;
        let col = usize::try_from(point.x).ok()?;
        (row < self.height() && col < self.width()).then_some((row, col))
    }
}

impl Index<usize> for Lattice {
    type Output = [LatticeToken];

    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> LayoutGrid {
        let rows = rows
            .iter()
            .map(|r| r.split_whitespace().map(|t| t.parse().unwrap()).collect())
            .collect();
        LayoutGrid::new(rows).unwrap()
    }

    #[test]
    fn test_layout_rejects_ragged_rows() {
        let open = Cell::new('o');
        let err = LayoutGrid::new(vec![vec![open, open], vec![open]]).unwrap_err();
        assert!(matches!(err, BoardError::MalformedGrid { .. }));
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_layout_rejects_empty() {
        assert!(matches!(
            LayoutGrid::new(Vec::new()),
            Err(BoardError::MalformedGrid { .. })
        ));
    }

    #[test]
    fn test_has_row_matching() {
        let layout = grid(&["o B o", "x x o", "A 2"]);
        assert!(layout.has_row_matching(&["o", "B", "o"]));
        assert!(layout.has_row_matching(&["x", "x", "o"]));
        assert!(layout.has_row_matching(&["A", "2"]));
        assert!(!layout.has_row_matching(&["o", "b", "o"]));
        assert!(!layout.has_row_matching(&["x", "x"]));
        assert!(!layout.has_row_matching(&["o", "oo", "o"]));
    }

    #[test]
    fn test_token_rows_keep_case() {
        let layout = grid(&["X o", "b O"]);
        assert_eq!(layout.to_token_rows(), vec![vec!["X", "o"], vec!["b", "O"]]);
    }

    #[test]
    fn test_expand_dimensions_and_centers() {
        let layout = grid(&["o x A", "x o o"]);
        let lattice = Lattice::from_layout(&layout);

        assert_eq!(lattice.height(), 5);
        assert_eq!(lattice.width(), 7);
        for row in 0..layout.height() {
            for col in 0..layout.width() {
                assert_eq!(
                    lattice[2 * row + 1][2 * col + 1],
                    LatticeToken::Cell(layout[row][col])
                );
            }
        }
        assert_eq!(lattice[1][5], LatticeToken::Cell(Cell::new('A')));
        assert_eq!(lattice[0][0], LatticeToken::Edge);
        assert_eq!(lattice[2][3], LatticeToken::Edge);
        assert_eq!(lattice.to_token_rows()[1], ["-", "o", "-", "x", "-", "A", "-"]);
    }

    #[test]
    fn test_mark_respects_bounds() {
        let mut lattice = Lattice::from_layout(&grid(&["o"]));
        assert!(lattice.mark(Point::new(2, 1), LatticeToken::Point));
        assert_eq!(lattice.get(Point::new(2, 1)), Some(LatticeToken::Point));

        assert!(!lattice.mark(Point::new(3, 0), LatticeToken::Laser));
        assert!(!lattice.mark(Point::new(-1, 0), LatticeToken::Laser));
        assert_eq!(lattice.get(Point::new(0, 3)), None);
    }
}
