//! Recursive separator chunking strategy (§4.E.3).
//!
//! Hierarchically splits a range using the separator list
//! `["\n\n", "\n", " ", ""]`: parts at the current depth are greedily
//! accumulated into a buffer; each buffer (full or final) recurses into
//! the next depth, which is a no-op if the buffer already fits.

use super::util::midpoint_split;
use crate::core::{Chunk, ChunkBuilder, Document, chunk::chunk_id};
use crate::error::Result;
use crate::tokenizer::Tokenizer;

use super::traits::Chunker;

const SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Recursive separator chunker.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveChunker;

impl RecursiveChunker {
    /// Creates a new recursive separator chunker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Chunker for RecursiveChunker {
    fn chunk(
        &self,
        document: &Document,
        tokenizer: &dyn Tokenizer,
        max_tokens: usize,
        _overlap_tokens: usize,
    ) -> Result<Vec<Chunk>> {
        let ranges = split_range(tokenizer, &document.body, 0, document.body.len(), max_tokens, 0);

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
        "recursive"
    }

    fn description(&self) -> &'static str {
        "Hierarchical separator-based splitting, falling back to a character split"
    }
}

fn split_range(
    tokenizer: &dyn Tokenizer,
    text: &str,
    start: usize,
    end: usize,
    max_tokens: usize,
    depth: usize,
) -> Vec<(usize, usize)> {
    if start >= end {
        return Vec::new();
    }

    if tokenizer.count(&text[start..end]) <= max_tokens {
        return vec![(start, end)];
    }

    if depth >= SEPARATORS.len() {
        return unconditional_split(tokenizer, text, start, end, max_tokens);
    }

    let separator = SEPARATORS[depth];
    if separator.is_empty() {
        return match midpoint_split(text, start, end) {
            Some((lo_start, mid)) => {
                let mut result = split_range(tokenizer, text, lo_start, mid, max_tokens, 0);
                result.extend(split_range(tokenizer, text, mid, end, max_tokens, 0));
                result
            }
            None => vec![(start, end)],
        };
    }

    let parts = split_with_positions(&text[start..end], separator, start);
    if parts.len() <= 1 {
        return split_range(tokenizer, text, start, end, max_tokens, depth + 1);
    }

    let mut results = Vec::new();
    let mut buf_start = parts[0].0;
    let mut buf_end = parts[0].1;

    for &(part_start, part_end) in &parts[1..] {
        let candidate = (buf_start, part_end);
        if tokenizer.count(&text[candidate.0..candidate.1]) <= max_tokens {
            buf_end = part_end;
        } else {
            results.extend(split_range(tokenizer, text, buf_start, buf_end, max_tokens, depth + 1));
            buf_start = part_start;
            buf_end = part_end;
        }
    }
    results.extend(split_range(tokenizer, text, buf_start, buf_end, max_tokens, depth + 1));

    results
}

fn unconditional_split(
    tokenizer: &dyn Tokenizer,
    text: &str,
    start: usize,
    end: usize,
    max_tokens: usize,
) -> Vec<(usize, usize)> {
    match midpoint_split(text, start, end) {
        Some((lo_start, mid)) => {
            let mut result = split_range(tokenizer, text, lo_start, mid, max_tokens, 0);
            result.extend(split_range(tokenizer, text, mid, end, max_tokens, 0));
            result
        }
        None => vec![(start, end)],
    }
}

/// Splits `slice` on `separator`, returning byte ranges offset by `base`
/// into the owning text. Mirrors `str::split`'s non-overlapping match
/// semantics so the parts reconstruct the original slice when rejoined.
fn split_with_positions(slice: &str, separator: &str, base: usize) -> Vec<(usize, usize)> {
    let mut parts = Vec::new();
    let mut last = 0;
    for (idx, _) in slice.match_indices(separator) {
        parts.push((base + last, base + idx));
        last = idx + separator.len();
    }
    parts.push((base + last, base + slice.len()));
    parts
}
