//! Errors raised while reading and interpreting board files.

use std::path::PathBuf;

/// Everything that can stop a board from being read.
///
/// Line numbers count entries of the normalized line sequence (1-based),
/// so comments and blank lines are not counted.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum BoardError {
    /// The board file could not be found
    #[error("board file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The board file exists but could not be read
    #[error("failed to read board file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The grid section is missing, unterminated, ragged, or holds an unknown token
    #[error("malformed grid: {reason}")]
    MalformedGrid { reason: String },

    /// A block, laser or point line has bad or missing numbers
    #[error("malformed entry on line {line} ('{text}'): {reason}")]
    MalformedEntry {
        line: usize,
        text: String,
        reason: String,
    },

    /// A laser origin or point falls outside the lattice
    #[error("{what} at ({x}, {y}) on line {line} lies outside the {width}x{height} lattice")]
    OutOfBounds {
        line: usize,
        what: &'static str,
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    /// A line matched no known shape (strict mode only)
    #[error("unrecognized line {line}: '{text}'")]
    UnrecognizedLine { line: usize, text: String },
}

impl BoardError {
    pub(crate) fn malformed_grid(reason: impl Into<String>) -> Self {
        Self::MalformedGrid {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_entry(line: usize, text: &str, reason: impl Into<String>) -> Self {
        Self::MalformedEntry {
            line,
            text: text.to_string(),
            reason: reason.into(),
        }
    }

    /// Stable identifier for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Io { .. } => "io",
            Self::MalformedGrid { .. } => "malformed_grid",
            Self::MalformedEntry { .. } => "malformed_entry",
            Self::OutOfBounds { .. } => "out_of_bounds",
            Self::UnrecognizedLine { .. } => "unrecognized_line",
        }
    }

    /// Whether the error came from the file system rather than the board text.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Io { .. })
    }
}
