//! Filesystem concerns: the output directory and its contents.
//!
//! This module handles:
//! - Resolving and creating the screenshots directory
//! - Timestamped filename generation
//! - Listing previously captured screenshots

pub mod paths;
pub mod scan;

// Re-export main functions
pub use paths::{ensure_output_dir, resolve_output_dir, timestamped_filename};
pub use scan::list_screenshots;
