//! Guided sequence command implementation.
//!
//! The sequence command:
//! 1. Ensures the output directory exists
//! 2. Walks the operator through the six fixed captures, pausing before each
//! 3. Records every outcome; a failed step never aborts the run
//! 4. Prints a final summary listing the successful captures

use crate::capture::{CaptureRecord, CaptureTool, SequenceReport};
use crate::commands::capture::attempt_capture;
use crate::storage::ensure_output_dir;
use crate::utils::config::{DEFAULT_OUTPUT_DIR, GUIDED_SEQUENCE, STEP_PAUSE};
use anyhow::{Context, Result};
use chrono::Local;
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the sequence command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SequenceArgs {
    /// Output directory for all captures
    pub dir: PathBuf,

    /// Skip the interactive pauses (non-interactive runs)
    pub assume_yes: bool,

    /// Print the final report as JSON after the summary
    pub emit_json: bool,

    /// The capture tool invoked for every step
    pub tool: CaptureTool,
}

impl Default for SequenceArgs {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            assume_yes: false,
            emit_json: false,
            tool: CaptureTool::new(),
        }
    }
}

/// Execute the guided sequence command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The full sequence report. Individual capture failures and
/// cancellations are recorded, reported, and never abort the run.
///
/// # Errors
/// Only environment problems: an unwritable output directory or an
/// unserializable JSON payload.
pub fn execute_sequence(args: SequenceArgs) -> Result<SequenceReport> {
    run_sequence(args, &mut io::stdin().lock())
}

/// Sequence engine behind `execute_sequence`
///
/// Takes the operator input as a reader so the pause prompts can be
/// driven without a terminal.
fn run_sequence(args: SequenceArgs, input: &mut impl BufRead) -> Result<SequenceReport> {
    let start_time = Instant::now();
    let total = GUIDED_SEQUENCE.len();

    info!("Starting guided sequence ({total} steps)");

    println!("Guided screenshot sequence");
    println!("{}", "=".repeat(50));
    println!("This walks you through {total} captures that document an application.");
    println!("Make sure the application you are documenting is visible on screen.");

    ensure_output_dir(&args.dir).context("Failed to prepare output directory")?;

    let mut records: Vec<CaptureRecord> = Vec::with_capacity(total);

    if let Err(err) = args.tool.preflight() {
        // Without a capture tool every step would fail identically;
        // bail before prompting the operator six times for nothing.
        println!("✗ {err}");
        return finish(&args, records, total);
    }

    for (i, (prefix, description)) in GUIDED_SEQUENCE.iter().enumerate() {
        let step = i + 1;
        println!();
        println!("Screenshot {step}/{total}: {description}");

        if !args.assume_yes && !pause_for_operator(input) {
            println!("Input closed; stopping the sequence here.");
            break;
        }

        let outcome = attempt_capture(&args.tool, &args.dir, prefix);
        if !outcome.is_saved() {
            println!("   Skipping this screenshot");
        }

        records.push(CaptureRecord {
            prefix: (*prefix).to_string(),
            description: (*description).to_string(),
            outcome,
        });

        if step < total && !args.assume_yes {
            println!("   Prepare for the next screenshot...");
            std::thread::sleep(STEP_PAUSE);
        }
    }

    println!();
    println!("Screenshot sequence complete");
    let report = finish(&args, records, total);

    info!(
        "Sequence completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    report
}

/// Build the report, print the final summary, and emit JSON when asked
fn finish(
    args: &SequenceArgs,
    records: Vec<CaptureRecord>,
    total: usize,
) -> Result<SequenceReport> {
    let report = SequenceReport {
        directory: args.dir.clone(),
        records,
        finished_at: Local::now().to_rfc3339(),
    };

    println!(
        "Saved {}/{} screenshots to {}",
        report.saved_count(),
        total,
        args.dir.display()
    );

    if report.saved_count() > 0 {
        println!();
        println!("Captured screenshots:");
        for record in report.saved() {
            if let Some(path) = record.outcome.path() {
                let name = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("<non-utf8 name>");
                println!("  • {} - {}", name, record.description);
            }
        }
    }

    if args.emit_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report)
                .context("Failed to serialize sequence report")?
        );
    }

    Ok(report)
}

/// Block until the operator presses Enter
///
/// Returns false when the input is closed (EOF or read error), which
/// ends the run cleanly instead of spinning through the remaining
/// prompts.
fn pause_for_operator(input: &mut impl BufRead) -> bool {
    print!("   Press Enter when ready to capture... ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    matches!(input.read_line(&mut line), Ok(n) if n > 0)
}
