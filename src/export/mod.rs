//! Multi-format exporters for llms-export.
//!
//! Four pure functions turn a scanned corpus into bytes: a directory
//! index, a full concatenation, a chunk-per-line JSONL stream, and an
//! enriched-Markdown document. See [`crate::orchestrator`] for the
//! entry points external callers use.

pub mod full;
pub mod index;
pub mod jsonl;
pub mod markdown;

pub use full::build_full;
pub use index::build_index;
pub use jsonl::build_jsonl;
pub use markdown::build_markdown;
