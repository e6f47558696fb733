//! Board file reading and line normalization.
//!
//! Turns a `.bff` file into the ordered list of meaningful lines the
//! interpreter works on: trimmed, with blank lines and `#` comments removed.

use crate::constants::BOARD_FILE_EXTENSION;
use crate::error::BoardError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Appends the board file extension unless the path already has it.
///
/// `puzzle` becomes `puzzle.bff`; `puzzle.txt` becomes `puzzle.txt.bff`.
#[must_use]
pub fn with_board_extension(path: &Path) -> PathBuf {
    let has_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(BOARD_FILE_EXTENSION));

    if has_extension {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(BOARD_FILE_EXTENSION);
        PathBuf::from(name)
    }
}

/// Resolves a board name to a file path.
///
/// The extension is defaulted first. A relative path that does not exist in
/// the working directory is looked up in `search_dir` when one is given; if it
/// is not there either, the working-directory path is returned so the caller
/// reports the name the user typed.
#[must_use]
pub fn resolve_board_path(name: &Path, search_dir: Option<&Path>) -> PathBuf {
    let path = with_board_extension(name);

    if path.exists() || path.is_absolute() {
        return path;
    }

    if let Some(dir) = search_dir {
        let candidate = dir.join(&path);
        if candidate.exists() {
            debug!(path = %candidate.display(), "resolved board from puzzle directory");
            return candidate;
        }
    }

    path
}

/// Splits board text into normalized lines.
pub fn normalize_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Reads a board file and returns its normalized lines.
///
/// The board extension is appended when missing.
pub fn read_board_file(path: &Path) -> Result<Vec<String>, BoardError> {
    let path = with_board_extension(path);

    let content = std::fs::read_to_string(&path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => BoardError::NotFound { path: path.clone() },
        _ => BoardError::Io {
            path: path.clone(),
            source,
        },
    })?;

    let lines = normalize_lines(&content);
    debug!(path = %path.display(), lines = lines.len(), "read board file");
    Ok(lines)
}
