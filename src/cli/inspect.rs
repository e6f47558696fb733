//! Inspect command: print an interpreted board.

use crate::cli::common::{CliContext, CliError, CliResult};
use crate::export::{render_dump, render_section, BoardSink, Section, TracingSink};
use crate::models::BoardModel;
use crate::services::{BoardService, LoadOptions};
use clap::Args;
use std::path::PathBuf;

/// Print the parsed contents of a board file
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Board file (the .bff extension may be omitted)
    #[arg(value_name = "BOARD")]
    pub board: PathBuf,

    /// Only print one part of the board
    #[arg(long, value_enum)]
    pub section: Option<Section>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Reject lines that match no known shape
    #[arg(long)]
    pub strict: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let options = LoadOptions::from_config(&ctx.config).with_strict(self.strict);
        let path = BoardService::resolve(&self.board, &options);

        let mut tracing_sink = TracingSink;
        let sink: Option<&mut dyn BoardSink> = if ctx.verbose {
            Some(&mut tracing_sink)
        } else {
            None
        };

        let board = BoardService::load_resolved(&path, &options, sink)
            .map_err(|e| CliError::from_board(&path, &e))?;

        if self.json {
            output_json(&board, self.section)
        } else {
            output_human_readable(&board, self.section);
            Ok(())
        }
    }
}

fn json_field(section: Section) -> &'static str {
    match section {
        Section::Blocks => "blocks",
        Section::Lasers => "lasers",
        Section::Points => "points",
        Section::Layout => "layout",
        Section::Lattice => "lattice",
    }
}

fn output_json(board: &BoardModel, section: Option<Section>) -> CliResult<()> {
    let mut value = serde_json::to_value(board)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;

    if let Some(section) = section {
        value = value[json_field(section)].take();
    }

    let text = serde_json::to_string_pretty(&value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{text}");
    Ok(())
}

fn output_human_readable(board: &BoardModel, section: Option<Section>) {
    match section {
        Some(Section::Lattice) => print!("{}", render_section(board, Section::Lattice)),
        Some(section) => println!("{}", render_section(board, section)),
        None => print!("{}", render_dump(board)),
    }
}
