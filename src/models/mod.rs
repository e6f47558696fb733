//! Data models for Lazor boards.
//!
//! These types are independent of file parsing and output; the parser builds
//! them and the CLI renders them.

pub mod block;
pub mod board;
pub mod cell;
pub mod grid;
pub mod laser;

// Re-export all model types
pub use block::{BlockEntry, BlockKind};
pub use board::BoardModel;
pub use cell::{Cell, LatticeToken};
pub use grid::{Lattice, LayoutGrid};
pub use laser::{Laser, Point};
