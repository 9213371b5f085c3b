//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while invoking the external capture tool
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("capture tool '{0}' not found on PATH (docshot drives the macOS `screencapture` utility)")]
    ToolNotFound(String),

    #[error("failed to launch capture tool '{program}': {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while managing the screenshots directory
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("cannot create output directory {}: {source}", path.display())]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read output directory {}: {source}", path.display())]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
