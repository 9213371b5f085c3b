//! Listing existing screenshots in the output directory.

use crate::utils::config::SCREENSHOT_EXT;
use crate::utils::error::StorageError;
use log::debug;
use std::path::Path;

/// List screenshot filenames in `dir`, sorted alphabetically
///
/// Only regular files with a case-insensitive `.png` extension count;
/// subdirectories and other extensions are skipped. A missing directory
/// yields an empty list rather than an error: nothing has been captured
/// yet.
///
/// # Errors
/// `StorageError::ReadDirFailed` when the directory exists but cannot be
/// read.
pub fn list_screenshots(dir: &Path) -> Result<Vec<String>, StorageError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir).map_err(|source| StorageError::ReadDirFailed {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| StorageError::ReadDirFailed {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_screenshot = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(SCREENSHOT_EXT));
        if !is_screenshot {
            continue;
        }

        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            names.push(name.to_string());
        }
    }

    names.sort();

    debug!("found {} screenshot(s) in {}", names.len(), dir.display());
    Ok(names)
}
