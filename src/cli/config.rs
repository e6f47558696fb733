//! Configuration management CLI commands.

use crate::cli::common::{CliContext, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Directory searched for boards given by name
    #[arg(long, value_name = "DIR")]
    puzzle_dir: Option<PathBuf>,

    /// Reject unrecognized lines by default (true or false)
    #[arg(long, value_name = "BOOL")]
    strict: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    puzzle_dir: Option<String>,
    strict: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(ctx),
            ConfigCommand::Set(args) => args.execute(ctx),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let output = ConfigOutput {
            config_file: ctx.config_path.display().to_string(),
            puzzle_dir: ctx
                .config
                .paths
                .puzzle_dir
                .as_ref()
                .map(|p| p.display().to_string()),
            strict: ctx.config.parse.strict,
        };

        if self.json {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        } else {
            println!("Configuration ({})", output.config_file);
            println!();
            println!(
                "  Puzzle directory: {}",
                output.puzzle_dir.as_deref().unwrap_or("(not set)")
            );
            println!("  Strict parsing:   {}", output.strict);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        if self.puzzle_dir.is_none() && self.strict.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --puzzle-dir or --strict",
            ));
        }

        let mut config: Config = ctx.config.clone();

        if let Some(dir) = &self.puzzle_dir {
            config
                .set_puzzle_dir(dir.clone())
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(strict) = self.strict {
            config.parse.strict = strict;
        }

        config
            .save_to(&ctx.config_path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("✓ Configuration saved to {}", ctx.config_path.display());
        Ok(())
    }
}
