//! Reading and interpreting Lazor board files.
//!
//! [`lines`] turns a file into normalized lines, [`classify`] tags each line
//! by shape, and [`board`] assembles the tagged lines into a [`BoardModel`].
//!
//! [`BoardModel`]: crate::models::BoardModel

pub mod board;
pub mod classify;
pub mod lines;

// Re-export commonly used functions
pub use board::{interpret, interpret_verbose, BoardInterpreter};
pub use classify::{classify_line, GridMarker, LineKind};
pub use lines::{normalize_lines, read_board_file, resolve_board_path, with_board_extension};
