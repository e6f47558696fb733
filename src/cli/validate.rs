//! Validation command for board files.

use crate::cli::common::{CliContext, CliError, CliResult};
use crate::export::{BoardSink, TracingSink};
use crate::services::{BoardService, LoadOptions};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Check that a board file can be interpreted
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Board file (the .bff extension may be omitted)
    #[arg(value_name = "BOARD")]
    pub board: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat unrecognized lines as errors
    #[arg(long)]
    pub strict: bool,
}

/// JSON response for `validate`.
#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    path: String,
    strict: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<BoardSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ValidationError>,
}

#[derive(Debug, Serialize)]
struct BoardSummary {
    rows: usize,
    cols: usize,
    blocks: u32,
    fixed: Vec<String>,
    lasers: usize,
    points: usize,
}

#[derive(Debug, Serialize)]
struct ValidationError {
    kind: &'static str,
    message: String,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let options = LoadOptions::from_config(&ctx.config).with_strict(self.strict);
        let path = BoardService::resolve(&self.board, &options);

        let mut tracing_sink = TracingSink;
        let sink: Option<&mut dyn BoardSink> = if ctx.verbose {
            Some(&mut tracing_sink)
        } else {
            None
        };

        let result = BoardService::load_resolved(&path, &options, sink);

        let response = match &result {
            Ok(board) => ValidationResponse {
                valid: true,
                path: path.display().to_string(),
                strict: options.strict,
                summary: Some(BoardSummary {
                    rows: board.layout.height(),
                    cols: board.layout.width(),
                    blocks: board.total_blocks(),
                    fixed: board
                        .fixed_blocks()
                        .iter()
                        .map(ToString::to_string)
                        .collect(),
                    lasers: board.lasers.len(),
                    points: board.points.len(),
                }),
                error: None,
            },
            Err(e) => ValidationResponse {
                valid: false,
                path: path.display().to_string(),
                strict: options.strict,
                summary: None,
                error: Some(ValidationError {
                    kind: e.kind(),
                    message: e.to_string(),
                }),
            },
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if let Some(summary) = &response.summary {
            println!("✓ {} is valid", response.path);
            println!();
            println!("  Grid:    {} x {}", summary.rows, summary.cols);
            println!("  Blocks:  {}", summary.blocks);
            if !summary.fixed.is_empty() {
                println!("  Fixed:   {}", summary.fixed.join(", "));
            }
            println!("  Lasers:  {}", summary.lasers);
            println!("  Points:  {}", summary.points);
        } else if let Some(error) = &response.error {
            println!("✗ {} is invalid", response.path);
            println!();
            println!("  [{}] {}", error.kind, error.message);
        }

        match result {
            Ok(_) => Ok(()),
            Err(e) => Err(CliError::from_board(&path, &e)),
        }
    }
}
