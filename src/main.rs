//! docshot CLI
//!
//! Captures screenshots through the platform's interactive capture tool
//! and generates README-ready Markdown galleries from the results.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use docshot::capture::CaptureTool;
use docshot::commands::{
    execute_capture, execute_sequence, execute_update_readme, validate_args, CaptureArgs,
    ReadmeArgs, SequenceArgs,
};
use docshot::storage::resolve_output_dir;
use docshot::utils::config::DEFAULT_PREFIX;

/// docshot - screenshot capture for project documentation
///
/// Without a mode flag, takes a single interactive screenshot into the
/// output directory.
#[derive(Parser, Debug)]
#[command(name = "docshot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Walk through the guided six-step capture sequence
    #[arg(long, conflicts_with = "update_readme")]
    sequence: bool,

    /// Print Markdown image embeds for the existing screenshots
    #[arg(long)]
    update_readme: bool,

    /// Output directory for captures (created on demand)
    #[arg(long, env = "DOCSHOT_DIR", value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Filename prefix for single-capture mode
    #[arg(
        long,
        default_value = DEFAULT_PREFIX,
        value_name = "PREFIX",
        conflicts_with_all = ["sequence", "update_readme"]
    )]
    prefix: String,

    /// Skip the interactive pauses in sequence mode
    #[arg(long, requires = "sequence")]
    yes: bool,

    /// Emit a machine-readable JSON result for the selected mode
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let dir = resolve_output_dir(cli.dir);

    // Execute the selected mode
    if cli.update_readme {
        execute_update_readme(ReadmeArgs {
            dir,
            emit_json: cli.json,
        })?;
    } else if cli.sequence {
        execute_sequence(SequenceArgs {
            dir,
            assume_yes: cli.yes,
            emit_json: cli.json,
            tool: CaptureTool::new(),
        })?;
    } else {
        let args = CaptureArgs {
            dir,
            prefix: cli.prefix,
            emit_json: cli.json,
            tool: CaptureTool::new(),
        };

        // Validate args first
        validate_args(&args)?;

        execute_capture(args)?;
    }

    Ok(())
}
