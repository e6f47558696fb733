//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Lazor Board";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "lazor-board";

/// Extension of board files, without the dot.
pub const BOARD_FILE_EXTENSION: &str = "bff";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "LazorBoard";
