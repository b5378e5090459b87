//! # llms-export
//!
//! LLM-export core for a Markdown documentation toolchain.
//!
//! This crate implements the hard engineering behind turning a corpus of
//! Markdown documents into representations consumable by large language
//! models and vector databases:
//!
//! - **Scanning**: walk a root directory, apply gitignore-style exclusion,
//!   strip YAML frontmatter, and extract sections/links/code blocks.
//! - **Tokenization**: an OpenAI-compatible (`cl100k_base`) byte-pair
//!   tokenizer used to measure chunk sizes in tokens.
//! - **Chunking**: a pluggable family of strategies (fixed, header-bounded,
//!   recursive-separator, semantic-fallback) producing token-bounded,
//!   overlap-controlled fragments.
//! - **Exporting**: four output formats — a directory-index listing, a
//!   full-concatenation form, a line-delimited JSON stream for vector-DB
//!   ingest, and an enriched-Markdown form with per-document YAML headers.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod chunking;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod io;
pub mod orchestrator;
pub mod scanner;
pub mod tokenizer;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{Chunk, ChunkRecord, CodeBlock, Document, FrontmatterValue, Link, Section};

// Re-export configuration types
pub use config::{ProjectConfig, ProjectFile};

// Re-export chunking types
pub use chunking::{Chunker, available_strategies, create_chunker};

// Re-export tokenizer types
pub use tokenizer::{Cl100kTokenizer, Tokenizer};

// Re-export scanner types
pub use scanner::{IgnoreMatcher, Scanner};

// Re-export orchestrator entry points
pub use orchestrator::{build_full, build_index, build_jsonl, build_markdown};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
