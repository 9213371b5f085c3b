//! Invocation of the external screen-capture tool.
//!
//! This module handles:
//! - Wrapping the platform capture binary (`screencapture` on macOS)
//! - Mapping exit status + written file into a `CaptureOutcome`
//! - Result types consumed by the commands and the `--json` output

pub mod outcome;
pub mod tool;

// Re-export main types
pub use outcome::{CaptureOutcome, CaptureRecord, SequenceReport};
pub use tool::CaptureTool;
