//! Board file loading service.
//!
//! Centralizes the read → normalize → interpret pipeline so the CLI and
//! library callers resolve paths and report failures the same way.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::error::BoardError;
use crate::export::BoardSink;
use crate::models::BoardModel;
use crate::parser::{self, BoardInterpreter};

/// Options for loading a board file.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Reject unrecognized lines
    pub strict: bool,
    /// Directory to search when the board is not found relative to the working directory
    pub search_dir: Option<PathBuf>,
}

impl LoadOptions {
    /// Builds options from configuration defaults.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            strict: config.parse.strict,
            search_dir: config.paths.puzzle_dir.clone(),
        }
    }

    /// Forces strict mode on when `strict` is set; leaves the default otherwise.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict |= strict;
        self
    }
}

/// Service for loading board files.
pub struct BoardService;

impl BoardService {
    /// Loads and interprets a board file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use lazor_board::services::{BoardService, LoadOptions};
    ///
    /// let board = BoardService::load(Path::new("mad_1"), &LoadOptions::default(), None)?;
    /// println!("{} lasers", board.lasers.len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(
        name: &Path,
        options: &LoadOptions,
        sink: Option<&mut dyn BoardSink>,
    ) -> Result<BoardModel> {
        let path = Self::resolve(name, options);
        Self::load_resolved(&path, options, sink)
            .with_context(|| format!("Failed to load board from {}", path.display()))
    }

    /// Resolves a board name to the path that [`load`](Self::load) will read.
    #[must_use]
    pub fn resolve(name: &Path, options: &LoadOptions) -> PathBuf {
        parser::resolve_board_path(name, options.search_dir.as_deref())
    }

    /// Loads an already-resolved path, keeping the typed error.
    pub fn load_resolved(
        path: &Path,
        options: &LoadOptions,
        sink: Option<&mut dyn BoardSink>,
    ) -> std::result::Result<BoardModel, BoardError> {
        debug!(path = %path.display(), strict = options.strict, "loading board");
        let lines = parser::read_board_file(path)?;
        BoardInterpreter::new()
            .strict(options.strict)
            .interpret(&lines, sink)
    }
}
