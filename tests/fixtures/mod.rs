//! Shared test fixtures for board and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A 4x4 open board with two reflect blocks, one refract block, one laser
/// and four targets.
pub const MAD_1: &str = "\
# mad_1
GRID START
o o o o
o o o o
o o o o
o o o o
GRID STOP

A 2
C 1

L 2 7 1 -1

P 3 0
P 4 3
P 2 5
P 4 7
";

/// A 3x3 board with blocked corners and four lasers.
pub const DARK_1: &str = "\
GRID START
x o o
o o o
o o x
GRID STOP

B 3

L 3 0 -1 1
L 1 6 1 -1
L 3 6 -1 -1
L 4 3 1 -1

P 0 3
P 6 1
";

/// A 3x3 board with an opaque block already fixed in the grid.
pub const TINY_5: &str = "\
# x = no block allowed, o = blocks allowed, B = fixed opaque block
GRID START
o B o
o o o
o o o
GRID STOP

A 3
C 1

L 4 5 -1 -1

P 1 2
P 6 3
";

/// The board from the interpreter's reference scenario.
pub const SCENARIO: &str = "\
GRID START
o o
o o
GRID STOP
A 0 2
L 1 0 0 1
P 0 2
";

/// Writes a board file into `dir` and returns its path.
pub fn write_board(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, content).expect("Failed to write board file");
    path
}

/// Creates a board file in a temp directory and returns the path.
pub fn create_temp_board(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let board_path = write_board(temp_dir.path(), "test_board.bff", content);
    (board_path, temp_dir)
}

/// Path for an isolated config file inside `dir` (not created).
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join("config").join("config.toml")
}

/// Normalized lines of a fixture, as the interpreter receives them.
pub fn lines_of(content: &str) -> Vec<String> {
    lazor_board::parser::normalize_lines(content)
}
