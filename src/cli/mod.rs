//! CLI layer for llms-export.
//!
//! Provides the command-line interface using clap, with commands for
//! scanning a corpus, chunking a single file, testing ignore patterns,
//! and exporting to any of the four supported formats.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
