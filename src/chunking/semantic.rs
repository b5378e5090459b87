//! Semantic fallback chunking strategy (§4.E.4).
//!
//! Reserved as a named capability for future sentence/paragraph-aware
//! splitting; delegates to the fixed-size strategy's byte-range search
//! until that capability lands.

use super::fixed::chunk_range;
use crate::core::{Chunk, ChunkBuilder, Document, chunk::chunk_id};
use crate::error::Result;
use crate::tokenizer::Tokenizer;

use super::traits::Chunker;

/// Semantic-fallback chunker.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticChunker;

impl SemanticChunker {
    /// Creates a new semantic-fallback chunker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Chunker for SemanticChunker {
    fn chunk(
        &self,
        document: &Document,
        tokenizer: &dyn Tokenizer,
        max_tokens: usize,
        overlap_tokens: usize,
    ) -> Result<Vec<Chunk>> {
        let ranges = chunk_range(
            tokenizer,
            &document.body,
            0,
            document.body.len(),
            max_tokens,
            overlap_tokens,
        );

        Ok(ranges
            .into_iter()
            .enumerate()
            .map(|(ordinal, (start, end))| {
                let text = document.body[start..end].to_string();
                let token_count = tokenizer.count(&text);
                ChunkBuilder::new(chunk_id(&document.id, ordinal))
                    .text(text)
                    .byte_range(start, end)
                    .token_count(token_count)
                    .build()
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "semantic"
    }

    fn description(&self) -> &'static str {
        "Sentence/paragraph-aware chunking (currently falls back to fixed-size splitting)"
    }
}
