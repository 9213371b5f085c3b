//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod capture;
pub mod readme;
pub mod sequence;

// Re-export main command functions
pub use capture::{execute_capture, validate_args, CaptureArgs};
pub use readme::{execute_update_readme, GalleryListing, ReadmeArgs};
pub use sequence::{execute_sequence, SequenceArgs};
