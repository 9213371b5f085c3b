//! Rendering of generated text artifacts.
//!
//! Today that is a single format: the Markdown gallery printed by
//! `--update-readme`.

pub mod markdown;

// Re-export main functions
pub use markdown::{alt_text, render_gallery};
