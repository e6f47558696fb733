//! Destinations for verbose board output.
//!
//! The interpreter never prints. When a caller wants to see what was parsed
//! it passes a [`BoardSink`], which receives the finished board exactly once.

use crate::export::dump::{render_dump, render_section, Section};
use crate::models::BoardModel;
use std::io::Write;
use tracing::{info, warn};

/// Receives a finished board for display.
pub trait BoardSink {
    /// Called once per successful interpretation.
    fn report(&mut self, board: &BoardModel);
}

/// Emits one `info` event per dump section.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl BoardSink for TracingSink {
    fn report(&mut self, board: &BoardModel) {
        for section in Section::ALL {
            info!(section = section.label(), "{}", render_section(board, section));
        }
    }
}

/// Writes the full text dump to any writer.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BoardSink for WriterSink<W> {
    fn report(&mut self, board: &BoardModel) {
        let dump = render_dump(board);
        if let Err(e) = self.writer.write_all(dump.as_bytes()) {
            warn!("failed to write board dump: {e}");
        }
    }
}
