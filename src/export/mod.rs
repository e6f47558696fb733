//! Rendering of interpreted boards.
//!
//! Text dumps for people and the sinks that deliver them.

pub mod dump;
pub mod sink;

pub use dump::{render_dump, render_lattice, render_section, Section};
pub use sink::{BoardSink, TracingSink, WriterSink};
