//! Output directory resolution and screenshot filename generation.

use crate::utils::config::{DEFAULT_OUTPUT_DIR, SCREENSHOT_EXT, TIMESTAMP_FORMAT};
use crate::utils::error::StorageError;
use chrono::{DateTime, Local};
use log::debug;
use std::path::{Path, PathBuf};

/// Resolve the output directory from an optional CLI/env override
///
/// Without an override this is the fixed directory name relative to the
/// working directory, so running docshot from a project root collects all
/// captures next to the project's README.
pub fn resolve_output_dir(overridden: Option<PathBuf>) -> PathBuf {
    overridden.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
}

/// Create the output directory if it does not exist yet
///
/// Idempotent: an existing directory is reused untouched.
///
/// # Errors
/// `StorageError::CreateDirFailed` when the directory cannot be created
/// (permissions, a file squatting on the name, ...).
pub fn ensure_output_dir(dir: &Path) -> Result<(), StorageError> {
    std::fs::create_dir_all(dir).map_err(|source| StorageError::CreateDirFailed {
        path: dir.to_path_buf(),
        source,
    })?;

    debug!("output directory ready: {}", dir.display());
    Ok(())
}

/// Generate a timestamped screenshot filename for `prefix`
///
/// Format: `<prefix>_<YYYYMMDD_HHMMSS_mmm>.png`. Millisecond precision
/// keeps rapid consecutive captures from colliding on a name.
pub fn timestamped_filename(prefix: &str, now: DateTime<Local>) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        now.format(TIMESTAMP_FORMAT),
        SCREENSHOT_EXT
    )
}
