//! Header-bounded chunking strategy (§4.E.2).
//!
//! Splits a document into sections at Markdown heading lines (the very
//! first line never counts as a boundary, so it always attaches to the
//! preamble). Sections that fit the token budget become a single chunk
//! each; oversize sections are delegated to the fixed-size strategy and
//! their sub-chunks renumbered into the document's ordinal sequence.

use super::fixed::chunk_range;
use crate::core::{Chunk, ChunkBuilder, Document, chunk::chunk_id};
use crate::error::Result;
use crate::tokenizer::Tokenizer;
use regex::Regex;
use std::sync::LazyLock;

use super::traits::Chunker;

static HEADING_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s+(.+)$").expect("static regex is valid"));

/// Header-bounded chunker.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderChunker;

impl HeaderChunker {
    /// Creates a new header-bounded chunker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Chunker for HeaderChunker {
    fn chunk(
        &self,
        document: &Document,
        tokenizer: &dyn Tokenizer,
        max_tokens: usize,
        overlap_tokens: usize,
    ) -> Result<Vec<Chunk>> {
        if tokenizer.count(&document.body) <= max_tokens {
            let token_count = tokenizer.count(&document.body);
            return Ok(vec![
                ChunkBuilder::new(chunk_id(&document.id, 0))
                    .text(document.body.clone())
                    .byte_range(0, document.body.len())
                    .token_count(token_count)
                    .build(),
            ]);
        }

        let sections = split_into_sections(&document.body);
        let mut ordinal = 0usize;
        let mut chunks = Vec::new();
        let mut offset = 0usize;

        for section_text in sections {
            let token_count = tokenizer.count(&section_text);
            if token_count <= max_tokens {
                chunks.push(
                    ChunkBuilder::new(chunk_id(&document.id, ordinal))
                        .text(section_text.clone())
                        .byte_range(offset, offset + section_text.len())
                        .token_count(token_count)
                        .build(),
                );
                ordinal += 1;
            } else {
                let sub_ranges = chunk_range(
                    tokenizer,
                    &section_text,
                    0,
                    section_text.len(),
                    max_tokens,
                    overlap_tokens,
                );
                for (start, end) in sub_ranges {
                    let text = section_text[start..end].to_string();
                    let sub_token_count = tokenizer.count(&text);
                    chunks.push(
                        ChunkBuilder::new(chunk_id(&document.id, ordinal))
                            .text(text)
                            .byte_range(offset + start, offset + end)
                            .token_count(sub_token_count)
                            .build(),
                    );
                    ordinal += 1;
                }
            }
            offset += section_text.len() + 1;
        }

        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "headers"
    }

    fn description(&self) -> &'static str {
        "Splits at Markdown headings, falling back to fixed-size chunking for oversize sections"
    }
}

/// Splits `body` into section texts at heading lines, excluding the
/// first line from boundary detection.
fn split_into_sections(body: &str) -> Vec<String> {
    let lines: Vec<&str> = body.lines().collect();
    if lines.is_empty() {
        return vec![String::new()];
    }

    let mut boundaries = vec![0usize];
    for (i, line) in lines.iter().enumerate().skip(1) {
        if HEADING_LINE_RE.is_match(line) {
            boundaries.push(i);
        }
    }
    boundaries.push(lines.len());

    boundaries
        .windows(2)
        .map(|w| lines[w[0]..w[1]].join("\n"))
        .collect()
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
    fn s3_header_split() {
        let body = "# A\n\nalpha.\n\n## B\n\nbeta.\n\n### C\n\ngamma.";
        let document = doc(body);
        let tokenizer = WordTokenizer;
        let chunks = HeaderChunker::new()
            .chunk(&document, &tokenizer, 100, 0)
            .unwrap();

        assert_eq!(chunks.len(), 3);
        assert!(chunks[0].text.starts_with("# A"));
        assert!(chunks[1].text.starts_with("## B"));
        assert!(chunks[2].text.starts_with("### C"));
    }

    #[test]
    fn first_line_heading_attaches_to_preamble() {
        let body = "# Title\n\nIntro text.\n\n## Section\n\nBody.";
        let sections = split_into_sections(body);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].starts_with("# Title"));
    }

    #[test]
    fn single_chunk_when_body_fits() {
        let body = "# A\n\nalpha.";
        let document = doc(body);
        let tokenizer = WordTokenizer;
        let chunks = HeaderChunker::new()
            .chunk(&document, &tokenizer, 512, 0)
            .unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start_byte, 0);
        assert_eq!(chunks[0].end_byte, body.len());
    }

    #[test]
    fn oversize_section_falls_back_to_fixed() {
        let filler = "word ".repeat(200);
        let body = format!("# Big\n\n{filler}");
        let document = doc(&body);
        let tokenizer = WordTokenizer;
        let chunks = HeaderChunker::new()
            .chunk(&document, &tokenizer, 20, 2)
            .unwrap();

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(tokenizer.count(&chunk.text) <= 20);
        }
    }

    #[test]
    fn ordinals_are_dense() {
        let filler = "word ".repeat(200);
        let body = format!("# Big\n\n{filler}\n\n## Small\n\nfits.");
        let document = doc(&body);
        let tokenizer = WordTokenizer;
        let chunks = HeaderChunker::new()
            .chunk(&document, &tokenizer, 20, 2)
            .unwrap();
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.id, format!("doc-chunk-{i}"));
        }
    }
}
