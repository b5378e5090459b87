//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros. Flag names,
//! presets, and exit codes are this binary's own surface; they are not
//! part of the orchestrator contract in [`crate::orchestrator`].

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// llms-export: scan a Markdown corpus, chunk it, and export
/// LLM/vector-DB-ready representations.
#[derive(Parser, Debug)]
#[command(name = "llms-export")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a project configuration YAML file.
    #[arg(short, long, env = "LLMS_EXPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a root directory and list the Markdown documents found.
    Scan {
        /// Root directory to scan.
        root: PathBuf,

        /// Gitignore-style patterns to exclude (repeatable).
        #[arg(long = "ignore")]
        ignore: Vec<String>,
    },

    /// Chunk a single Markdown file and print the resulting chunks.
    Chunk {
        /// Path to the Markdown file.
        file: PathBuf,

        /// Chunking strategy: fixed, headers, markdown-headers, recursive, semantic.
        #[arg(short, long, default_value = "fixed")]
        strategy: String,

        /// Maximum tokens per chunk.
        #[arg(long, default_value_t = crate::config::DEFAULT_CHUNK_SIZE)]
        max_tokens: usize,

        /// Target trailing-token overlap between chunks.
        #[arg(long, default_value_t = crate::config::DEFAULT_OVERLAP)]
        overlap: usize,
    },

    /// Test whether a relative path would be ignored by a pattern set.
    IgnoreTest {
        /// Relative path to test.
        path: String,

        /// Gitignore-style patterns (repeatable).
        #[arg(long = "pattern")]
        pattern: Vec<String>,

        /// Reserved for a future embedding-injection pipeline; the core
        /// never populates chunk vectors regardless of this flag.
        #[arg(long, hide = true)]
        include_embeddings: bool,
    },

    /// Export a scanned corpus to one of the supported formats.
    Export {
        /// Root directory to scan.
        root: PathBuf,

        /// Gitignore-style patterns to exclude (repeatable).
        #[arg(long = "ignore")]
        ignore: Vec<String>,

        /// Which export format to produce.
        #[command(subcommand)]
        format: ExportFormat,
    },
}

/// Export sub-commands, one per supported output format (§4.F–§4.I).
#[derive(Subcommand, Debug)]
pub enum ExportFormat {
    /// Directory-grouped index listing (`llms.txt`).
    Index {
        /// Project name (overrides the loaded config, if any).
        #[arg(long)]
        name: Option<String>,
        /// Project description (overrides the loaded config, if any).
        #[arg(long)]
        description: Option<String>,
        /// Output file path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// README-first concatenation of every document (`llms-full.txt`).
    Full {
        /// Project name (overrides the loaded config, if any).
        #[arg(long)]
        name: Option<String>,
        /// Project description (overrides the loaded config, if any).
        #[arg(long)]
        description: Option<String>,
        /// Output file path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Chunk-per-line JSON, suited for vector-DB ingest.
    Jsonl {
        /// Chunking strategy: fixed, headers, markdown-headers, recursive, semantic.
        #[arg(short, long, default_value = "fixed")]
        strategy: String,
        /// Maximum tokens per chunk.
        #[arg(long, default_value_t = crate::config::DEFAULT_CHUNK_SIZE)]
        max_tokens: usize,
        /// Target trailing-token overlap between chunks.
        #[arg(long, default_value_t = crate::config::DEFAULT_OVERLAP)]
        overlap: usize,
        /// Output file path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Enriched Markdown with a table of contents and per-document
    /// YAML frontmatter.
    Markdown {
        /// Output file path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
