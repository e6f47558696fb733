//! CLI command handlers for Lazor Board.
//!
//! Headless, scriptable access to the board interpreter.

pub mod common;
pub mod config;
pub mod inspect;
pub mod validate;

// Re-export types used by main.rs
pub use common::{CliContext, CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use inspect::InspectArgs;
pub use validate::ValidateArgs;
