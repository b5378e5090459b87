//! Fixed-size chunking strategy (§4.E.1).
//!
//! Walks a document's body left-to-right, using binary search over byte
//! offsets to find the largest chunk that fits within `max_tokens`,
//! backing off to a nearby word boundary, then computing the next
//! start from the overlap budget the same way.

use super::util::{back_off_to_word_boundary, largest_end_within_budget};
use crate::core::{Chunk, ChunkBuilder, Document, chunk::chunk_id};
use crate::error::Result;
use crate::tokenizer::Tokenizer;

use super::traits::Chunker;

/// Fixed-size chunker: the default strategy and the delegate target of
/// the header-bounded and semantic-fallback strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChunker;

impl FixedChunker {
    /// Creates a new fixed-size chunker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Chunker for FixedChunker {
    fn chunk(
        &self,
        document: &Document,
        tokenizer: &dyn Tokenizer,
        max_tokens: usize,
        overlap_tokens: usize,
    ) -> Result<Vec<Chunk>> {
        let chunks = chunk_range(
            tokenizer,
            &document.body,
            0,
            document.body.len(),
            max_tokens,
            overlap_tokens,
        );

        Ok(chunks
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
        "fixed"
    }

    fn description(&self) -> &'static str {
        "Fixed-size, token-bounded chunking with word-boundary back-off and token overlap"
    }
}

/// Splits `text[range_start..range_end]` into token-bounded byte ranges.
///
/// Shared by the header-bounded strategy (per oversize section) and the
/// semantic-fallback strategy, which both delegate here.
pub(super) fn chunk_range(
    tokenizer: &dyn Tokenizer,
    text: &str,
    range_start: usize,
    range_end: usize,
    max_tokens: usize,
    overlap_tokens: usize,
) -> Vec<(usize, usize)> {
    let body = &text[range_start..range_end];
    if tokenizer.count(body) <= max_tokens {
        return vec![(range_start, range_end)];
    }

    let mut chunks = Vec::new();
    let mut start = range_start;

    while start < range_end {
        let search_end = largest_end_within_budget(tokenizer, text, start, range_end, max_tokens);
        let end = if search_end < text.len() {
            let backed_off = back_off_to_word_boundary(text, start, search_end);
            if backed_off > start { backed_off } else { search_end }
        } else {
            search_end
        };
        let end = if end <= start { range_end.min(start + 1) } else { end };

        let chunk_token_count = tokenizer.count(&text[start..end]);
        chunks.push((start, end));

        if end >= range_end {
            break;
        }

        let next_start = if chunk_token_count > overlap_tokens {
            let overlap_budget = chunk_token_count - overlap_tokens;
            largest_end_within_budget(tokenizer, text, start, end, overlap_budget)
        } else {
            end
        };

        start = if next_start <= start { end } else { next_start };
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct WordTokenizer;
    impl Tokenizer for WordTokenizer {
        fn encode(&self, text: &str) -> Vec<u32> {
            (0..text.split_whitespace().count())
                .map(|i| i as u32)
                .collect()
        }
    }

    fn doc(body: &str) -> Document {
        Document {
            id: "doc".to_string(),
            path: PathBuf::from("/doc.md"),
            relative_path: "doc.md".to_string(),
            title: "Doc".to_string(),
            body: body.to_string(),
            modified: 0,
            frontmatter: HashMap::new(),
            sections: Vec::new(),
            links: Vec::new(),
            code_blocks: Vec::new(),
        }
    }

    #[test]
    fn s1_single_small_document() {
        let body = "# Docs\n\nHello.";
        let document = doc(body);
        let tokenizer = WordTokenizer;
        let chunks = FixedChunker::new()
            .chunk(&document, &tokenizer, 512, 128)
            .unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start_byte, 0);
        assert_eq!(chunks[0].end_byte, body.len());
        assert_eq!(chunks[0].id, "doc-chunk-0");
    }

    #[test]
    fn s2_multi_chunk_body() {
        let body = "This is a test sentence with multiple words. ".repeat(100);
        let document = doc(&body);
        let tokenizer = WordTokenizer;
        let chunks = FixedChunker::new()
            .chunk(&document, &tokenizer, 50, 10)
            .unwrap();

        assert!(chunks.len() >= 5);
        for chunk in &chunks {
            assert!(tokenizer.count(&chunk.text) <= 50);
        }
        for i in 0..chunks.len() - 1 {
            assert!(chunks[i + 1].start_byte < chunks[i].end_byte);
        }
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.id, format!("doc-chunk-{i}"));
        }
    }

    #[test]
    fn chunk_text_matches_document_slice() {
        let body = "alpha beta gamma delta epsilon zeta eta theta iota kappa ".repeat(20);
        let document = doc(&body);
        let tokenizer = WordTokenizer;
        let chunks = FixedChunker::new()
            .chunk(&document, &tokenizer, 20, 5)
            .unwrap();

        for chunk in &chunks {
            assert_eq!(chunk.text, document.body[chunk.start_byte..chunk.end_byte]);
        }
    }

    #[test]
    fn ordinals_are_dense_and_ascending() {
        let body = "word ".repeat(200);
        let document = doc(&body);
        let tokenizer = WordTokenizer;
        let chunks = FixedChunker::new()
            .chunk(&document, &tokenizer, 30, 5)
            .unwrap();

        let mut last_start = 0;
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.id, format!("doc-chunk-{i}"));
            assert!(chunk.start_byte >= last_start);
            last_start = chunk.start_byte;
        }
    }

    #[test]
    fn empty_body_yields_one_empty_chunk() {
        let document = doc("");
        let tokenizer = WordTokenizer;
        let chunks = FixedChunker::new()
            .chunk(&document, &tokenizer, 10, 2)
            .unwrap();
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].is_empty());
    }
}
