//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving user defaults in TOML
//! format with platform-specific directory resolution.

use crate::constants::CONFIG_DIR_NAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory searched for boards given by bare name (e.g., "`dark_1`")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puzzle_dir: Option<PathBuf>,
}

/// Interpretation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ParseConfig {
    /// Reject lines that match no known shape instead of skipping them
    #[serde(default)]
    pub strict: bool,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/LazorBoard/config.toml`
/// - macOS: `~/Library/Application Support/LazorBoard/config.toml`
/// - Windows: `%APPDATA%\LazorBoard\config.toml`
///
/// # Validation
///
/// - `puzzle_dir` must exist and be a directory when set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Interpretation defaults
    #[serde(default)]
    pub parse: ParseConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from an explicit file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to an explicit file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.paths.puzzle_dir {
            if !dir.is_dir() {
                anyhow::bail!("Puzzle directory does not exist: {}", dir.display());
            }
        }

        Ok(())
    }

    /// Sets the puzzle directory with validation.
    pub fn set_puzzle_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.paths.puzzle_dir = Some(dir);
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.puzzle_dir, None);
        assert!(!config.parse.strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_puzzle_dir() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = Config::new();
        assert!(config.set_puzzle_dir(temp_dir.path().join("missing")).is_err());
        assert!(config.set_puzzle_dir(temp_dir.path().to_path_buf()).is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.paths.puzzle_dir = Some(temp_dir.path().to_path_buf());
        config.parse.strict = true;
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_load_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_config_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[parse]\nstrict = true\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert!(loaded.parse.strict);
        assert_eq!(loaded.paths.puzzle_dir, None);
    }

    #[test]
    fn test_config_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[parse\nstrict = ").unwrap();

        let err = Config::load_from(&config_file).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }
}
