//! README gallery command implementation.
//!
//! Lists existing screenshots and prints Markdown image-embed lines the
//! operator can paste into a README. Nothing is written to disk.

use crate::output::render_gallery;
use crate::storage::list_screenshots;
use crate::utils::config::DEFAULT_OUTPUT_DIR;
use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the readme command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReadmeArgs {
    /// Directory scanned for screenshots
    pub dir: PathBuf,

    /// Print the file listing as JSON instead of the Markdown block
    pub emit_json: bool,
}

impl Default for ReadmeArgs {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            emit_json: false,
        }
    }
}

/// Machine-readable listing emitted under `--json`
#[derive(Debug, Clone, Serialize)]
pub struct GalleryListing {
    /// Directory that was scanned
    pub directory: PathBuf,

    /// Screenshot filenames, alphabetically sorted
    pub files: Vec<String>,
}

/// Execute the readme command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The rendered Markdown, or `None` when the directory holds no
/// screenshots (a notice is printed instead; that is not an error).
///
/// # Errors
/// Only environment problems: an unreadable directory or an
/// unserializable JSON payload.
pub fn execute_update_readme(args: ReadmeArgs) -> Result<Option<String>> {
    info!("Generating README markdown from {}", args.dir.display());

    let files =
        list_screenshots(&args.dir).context("Failed to scan the screenshots directory")?;

    if args.emit_json {
        let listing = GalleryListing {
            directory: args.dir.clone(),
            files: files.clone(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&listing)
                .context("Failed to serialize gallery listing")?
        );
    }

    if files.is_empty() {
        if !args.emit_json {
            println!("✗ No screenshots found in {}", args.dir.display());
        }
        return Ok(None);
    }

    let markdown = render_gallery(&dir_label(&args.dir), &files);

    if !args.emit_json {
        println!("Generating README markdown for {} screenshot(s)", files.len());
        println!("{}", "=".repeat(60));
        print!("{markdown}");
        println!("{}", "=".repeat(60));
        println!("✓ Copy this markdown into your README.md");
    }

    Ok(Some(markdown))
}

/// Path segment image links are written against
///
/// Links assume the README sits next to the output directory, so only
/// the directory's final component matters.
fn dir_label(dir: &std::path::Path) -> String {
    dir.file_name()
        .and_then(|name| name.to_str())
        .map(ToString::to_string)
        .unwrap_or_else(|| dir.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    #[test]
    fn test_dir_label_plain() {
        assert_eq!(dir_label(Path::new("screenshots")), "screenshots");
    }

    #[test]
    fn test_dir_label_nested() {
        assert_eq!(dir_label(Path::new("/tmp/project/captures")), "captures");
    }

    #[test]
    fn test_default_args_use_fixed_dir() {
        let args = ReadmeArgs::default();
        assert_eq!(args.dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(!args.emit_json);
    }

    #[test]
    fn test_empty_directory_yields_none() {
        let scratch = tempfile::tempdir().unwrap();
        let args = ReadmeArgs {
            dir: scratch.path().to_path_buf(),
            ..Default::default()
        };

        assert!(execute_update_readme(args).unwrap().is_none());
    }

    #[test]
    fn test_listing_json_shape() {
        let listing = GalleryListing {
            directory: PathBuf::from("screenshots"),
            files: vec!["a.png".to_string()],
        };

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["directory"], "screenshots");
        assert_eq!(value["files"][0], "a.png");
    }
}
