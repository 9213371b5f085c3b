//! Single-capture command implementation.
//!
//! The capture command:
//! 1. Ensures the output directory exists
//! 2. Generates a timestamped destination filename
//! 3. Invokes the interactive capture tool once
//! 4. Reports the outcome (and emits JSON when asked)

use crate::capture::{CaptureOutcome, CaptureTool};
use crate::storage::{ensure_output_dir, timestamped_filename};
use crate::utils::config::{DEFAULT_OUTPUT_DIR, DEFAULT_PREFIX};
use anyhow::{Context, Result};
use chrono::Local;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Arguments for the capture command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CaptureArgs {
    /// Output directory for the screenshot
    pub dir: PathBuf,

    /// Filename prefix (timestamp and extension are appended)
    pub prefix: String,

    /// Print the outcome as JSON after the friendly report
    pub emit_json: bool,

    /// The capture tool to invoke
    pub tool: CaptureTool,
}

impl Default for CaptureArgs {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            prefix: DEFAULT_PREFIX.to_string(),
            emit_json: false,
            tool: CaptureTool::new(),
        }
    }
}

/// Execute the capture command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Capture command arguments
///
/// # Returns
/// The capture outcome. Cancellation and tool failures are ordinary
/// outcomes, not errors: they are reported to the operator and the
/// process still exits 0.
///
/// # Errors
/// Only environment problems the tool cannot degrade around: an
/// unwritable output directory or an unserializable JSON payload.
pub fn execute_capture(args: CaptureArgs) -> Result<CaptureOutcome> {
    info!("Starting single capture with prefix '{}'", args.prefix);

    ensure_output_dir(&args.dir).context("Failed to prepare output directory")?;

    let outcome = if let Err(err) = args.tool.preflight() {
        println!("✗ {err}");
        CaptureOutcome::Failed {
            reason: err.to_string(),
        }
    } else {
        println!("Taking screenshot ({})", args.prefix);
        attempt_capture(&args.tool, &args.dir, &args.prefix)
    };

    if args.emit_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome)
                .context("Failed to serialize capture outcome")?
        );
    }

    info!("Capture finished (saved: {})", outcome.is_saved());
    Ok(outcome)
}

/// Run one capture into `dir` using `prefix` and report the result
///
/// Shared by single-capture mode and the guided sequence. A launch error
/// degrades to a `Failed` outcome here; nothing propagates.
pub(crate) fn attempt_capture(tool: &CaptureTool, dir: &Path, prefix: &str) -> CaptureOutcome {
    let filename = timestamped_filename(prefix, Local::now());
    let dest = dir.join(&filename);

    debug!("capture destination: {}", dest.display());
    println!("   Click and drag to select an area, press Space for a window, Esc to cancel");

    let outcome = match tool.capture(&dest) {
        Ok(outcome) => outcome,
        Err(err) => CaptureOutcome::Failed {
            reason: err.to_string(),
        },
    };

    match &outcome {
        CaptureOutcome::Saved { .. } => println!("✓ Screenshot saved: {filename}"),
        CaptureOutcome::Cancelled => println!("✗ Screenshot cancelled"),
        CaptureOutcome::Failed { reason } => println!("✗ Screenshot failed: {reason}"),
    }

    outcome
}

/// Validate capture arguments
///
/// **Public** - called before execute_capture for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &CaptureArgs) -> Result<()> {
    if args.prefix.is_empty() {
        anyhow::bail!("Filename prefix cannot be empty");
    }

    if args.prefix.contains(['/', '\\']) {
        anyhow::bail!("Filename prefix cannot contain path separators");
    }

    if args.prefix.starts_with('.') {
        anyhow::bail!("Filename prefix cannot start with '.'");
    }

    Ok(())
}
