//! Lazor Board Library
//!
//! Reads Lazor puzzle board files (`.bff`) and interprets them into a board
//! model: the layout grid, the block inventory, laser sources, required
//! points, and the expanded lattice that laser paths are traced on.
//!
//! ```
//! use lazor_board::parser::{interpret, normalize_lines};
//!
//! let text = "# tiny board\nGRID START\no x\nGRID STOP\nA 1\nL 0 1 1 1\nP 2 1\n";
//! let board = interpret(&normalize_lines(text)).unwrap();
//! assert_eq!(board.lattice.width(), 5);
//! assert_eq!(board.lattice[1][0].to_string(), "L");
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;
pub mod services;

pub use error::BoardError;
pub use models::BoardModel;
