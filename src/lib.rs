//! docshot
//!
//! Guided screenshot capture and README gallery generation
//! for project documentation.
//!
//! This crate provides the core implementation for the
//! `docshot` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install docshot
//! docshot --help
//! ```

pub mod capture;
pub mod commands;
pub mod output;
pub mod storage;
pub mod utils;
