//! Lazor Board - reader and interpreter for Lazor puzzle board files
//!
//! Parses `.bff` board files and prints or validates the interpreted board.

use clap::{Parser, Subcommand};
use lazor_board::cli::{CliContext, CliResult, ConfigArgs, InspectArgs, ValidateArgs};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Lazor Board - reader and interpreter for Lazor puzzle board files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (board dump and debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this configuration file instead of the platform default
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the parsed contents of a board file
    Inspect(InspectArgs),
    /// Check that a board file can be interpreted
    Validate(ValidateArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    let ctx = CliContext::load(cli.config.as_deref(), cli.verbose)?;

    match &cli.command {
        Command::Inspect(args) => args.execute(&ctx),
        Command::Validate(args) => args.execute(&ctx),
        Command::Config(args) => args.execute(&ctx),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }
}
