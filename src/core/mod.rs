//! Core domain models for llms-export.
//!
//! This module contains the fundamental data structures used throughout the
//! crate: documents parsed from the corpus, and the chunks produced from
//! them. These are pure domain models with no I/O dependencies.

pub mod chunk;
pub mod document;

pub use chunk::{Chunk, ChunkBuilder, ChunkRecord};
pub use document::{CodeBlock, Document, FrontmatterValue, Link, Section};
