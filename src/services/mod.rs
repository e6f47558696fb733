//! Service layer.
//!
//! Services compose the parser with file resolution and error context.

pub mod boards;

// Re-export commonly used types
pub use boards::{BoardService, LoadOptions};
