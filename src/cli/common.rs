//! Shared CLI types: errors, exit codes, and configuration loading.

use crate::config::Config;
use crate::error::BoardError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// The board (or an argument) is invalid
    ValidationError = 1,
    /// A file could not be found, read, or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI command.
#[derive(Debug)]
pub struct CliError {
    /// Exit code the process should end with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// A validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// An I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Maps a board error to the matching exit code.
    pub fn from_board(path: &Path, err: &BoardError) -> Self {
        let message = format!("{}: {}", path.display(), err);
        if err.is_io() {
            Self::io(message)
        } else {
            Self::validation(message)
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Options shared by every command.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// Loaded configuration
    pub config: Config,
    /// File the configuration was loaded from (and is saved to)
    pub config_path: PathBuf,
    /// Whether verbose output was requested
    pub verbose: bool,
}

impl CliContext {
    /// Loads configuration from `config_path`, or the platform default.
    pub fn load(config_path: Option<&Path>, verbose: bool) -> CliResult<Self> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => Config::config_file_path()
                .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}")))?,
        };

        let config = Config::load_from(&config_path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        Ok(Self {
            config,
            config_path,
            verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_errors_map_to_exit_codes() {
        let path = Path::new("x.bff");

        let not_found = BoardError::NotFound {
            path: path.to_path_buf(),
        };
        assert_eq!(
            CliError::from_board(path, &not_found).exit_code,
            ExitCode::IoError
        );

        let grid = BoardError::MalformedGrid {
            reason: "no rows".to_string(),
        };
        let err = CliError::from_board(path, &grid);
        assert_eq!(err.exit_code, ExitCode::ValidationError);
        assert_eq!(err.to_string(), "x.bff: malformed grid: no rows");
    }

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::ValidationError.code(), 1);
        assert_eq!(ExitCode::IoError.code(), 2);
    }
}
