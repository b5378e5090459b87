//! Chunker trait definition.
//!
//! Defines the common polymorphic contract every chunking strategy
//! honors: chunks never exceed the token budget, are returned in
//! ascending start order with dense ordinals, and a document that
//! already fits is returned as a single whole-body chunk.

use crate::core::{Chunk, Document};
use crate::error::Result;
use crate::tokenizer::Tokenizer;

/// Trait for splitting a document into token-bounded chunks.
///
/// Implementations must be `Send + Sync`: the line-delimited exporter
/// may chunk different documents concurrently.
pub trait Chunker: Send + Sync {
    /// Splits `document` into chunks no larger than `max_tokens`,
    /// targeting `overlap_tokens` of trailing-token overlap between
    /// consecutive chunks.
    ///
    /// # Errors
    ///
    /// Returns an error if `overlap_tokens >= max_tokens` while the
    /// document's body does not already fit in a single chunk.
    fn chunk(
        &self,
        document: &Document,
        tokenizer: &dyn Tokenizer,
        max_tokens: usize,
        overlap_tokens: usize,
    ) -> Result<Vec<Chunk>>;

    /// Returns the name of the chunking strategy.
    fn name(&self) -> &'static str;

    /// Returns whether this chunker benefits from being invoked from a
    /// parallel caller (all strategies are safe to call concurrently on
    /// different documents; this flags internal parallelism).
    fn supports_parallel(&self) -> bool {
        false
    }

    /// Returns a human-readable description of the strategy.
    fn description(&self) -> &'static str {
        "No description available"
    }

    /// Validates `(max_tokens, overlap_tokens)` before chunking.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ChunkingError::OverlapTooLarge`] if
    /// `overlap_tokens >= max_tokens`.
    fn validate(&self, max_tokens: usize, overlap_tokens: usize) -> Result<()> {
        if overlap_tokens >= max_tokens {
            return Err(crate::error::ChunkingError::OverlapTooLarge {
                overlap: overlap_tokens,
                max_tokens,
            }
            .into());
        }
        Ok(())
    }
}
