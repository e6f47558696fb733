//! The interpreted board: everything a solver needs from a board file.

use crate::models::{BlockEntry, BlockKind, Laser, Lattice, LayoutGrid, Point};
use serde::Serialize;

/// Result of interpreting a board file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardModel {
    /// Coarse cell grid as written in the file
    pub layout: LayoutGrid,
    /// Movable blocks available to place
    pub blocks: Vec<BlockEntry>,
    /// Laser sources in file order
    pub lasers: Vec<Laser>,
    /// Required intersection points in file order
    pub points: Vec<Point>,
    /// Expanded lattice with laser and point markers applied
    pub lattice: Lattice,
}

impl BoardModel {
    /// Splits the model into `(layout, blocks, lasers, points, lattice)`.
    #[must_use]
    pub fn into_parts(self) -> (LayoutGrid, Vec<BlockEntry>, Vec<Laser>, Vec<Point>, Lattice) {
        (self.layout, self.blocks, self.lasers, self.points, self.lattice)
    }

    /// Inventory in its compact text form (`["A02", "B1"]`).
    #[must_use]
    pub fn block_texts(&self) -> Vec<String> {
        self.blocks.iter().map(ToString::to_string).collect()
    }

    /// Total number of movable blocks across all inventory entries.
    #[must_use]
    pub fn total_blocks(&self) -> u32 {
        self.blocks.iter().map(|b| b.count).sum()
    }

    /// Blocks already fixed in the layout, in row order.
    #[must_use]
    pub fn fixed_blocks(&self) -> Vec<BlockKind> {
        self.layout
            .rows()
            .iter()
            .flatten()
            .filter_map(|cell| cell.fixed_block())
            .collect()
    }
}
