//! Chunk and chunk-record domain types.
//!
//! A [`Chunk`] is a contiguous byte span of a single [`Document`](super::Document)'s
//! body, produced by a chunking strategy (see [`crate::chunking`]). A
//! [`ChunkRecord`] wraps a [`Chunk`] with the navigation fields the
//! line-delimited exporter (§4.H) needs: parent document identity, source
//! path, and links to the chunks immediately before and after it.

/// A contiguous span of a document's body, with its token count.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Chunk {
    /// `<document-id>-chunk-<ordinal>`, stable across runs for a fixed input.
    pub id: String,
    /// The chunk's literal text.
    pub text: String,
    /// Start byte offset into the owning document's body.
    pub start_byte: usize,
    /// End byte offset into the owning document's body (exclusive).
    pub end_byte: usize,
    /// Token count of `text` under the crate's configured tokenizer.
    pub token_count: usize,
    /// Reserved for future embedding vectors; never populated by this crate.
    pub vector: Option<Vec<f32>>,
}

impl Chunk {
    /// True if `text` is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The chunk's byte length (`end_byte - start_byte`).
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.end_byte.saturating_sub(self.start_byte)
    }
}

/// A [`Chunk`] enriched with the fields the line-delimited exporter needs
/// to let a reader navigate between adjacent chunks of the same document.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ChunkRecord {
    /// The underlying chunk.
    pub chunk: Chunk,
    /// Identity of the document the chunk was extracted from.
    pub document_id: String,
    /// The document's path, relative to the scan root.
    pub source_path: String,
    /// Id of the preceding chunk in the same document, if any.
    pub prev_chunk_id: Option<String>,
    /// Id of the following chunk in the same document, if any.
    pub next_chunk_id: Option<String>,
}

/// Fluent constructor for [`Chunk`], generalized from the teacher's
/// character-counting chunk builder to track token counts instead.
#[derive(Debug, Default)]
pub struct ChunkBuilder {
    id: String,
    text: String,
    start_byte: usize,
    end_byte: usize,
    token_count: usize,
}

impl ChunkBuilder {
    /// Starts a new builder for the chunk with the given stable id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the chunk text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the byte range within the owning document.
    #[must_use]
    pub fn byte_range(mut self, start_byte: usize, end_byte: usize) -> Self {
        self.start_byte = start_byte;
        self.end_byte = end_byte;
        self
    }

    /// Sets the token count.
    #[must_use]
    pub fn token_count(mut self, token_count: usize) -> Self {
        self.token_count = token_count;
        self
    }

    /// Finalizes the builder into a [`Chunk`].
    #[must_use]
    pub fn build(self) -> Chunk {
        Chunk {
            id: self.id,
            text: self.text,
            start_byte: self.start_byte,
            end_byte: self.end_byte,
            token_count: self.token_count,
            vector: None,
        }
    }
}

/// Builds the stable chunk id `<document-id>-chunk-<ordinal>`.
#[must_use]
pub fn chunk_id(document_id: &str, ordinal: usize) -> String {
    format!("{document_id}-chunk-{ordinal}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_id_format() {
        assert_eq!(chunk_id("abc123", 0), "abc123-chunk-0");
        assert_eq!(chunk_id("abc123", 7), "abc123-chunk-7");
    }

    #[test]
    fn builder_produces_expected_chunk() {
        let chunk = ChunkBuilder::new("doc-chunk-0")
            .text("hello world")
            .byte_range(0, 11)
            .token_count(2)
            .build();

        assert_eq!(chunk.id, "doc-chunk-0");
        assert_eq!(chunk.text, "hello world");
        assert_eq!(chunk.byte_len(), 11);
        assert_eq!(chunk.token_count, 2);
        assert!(chunk.vector.is_none());
        assert!(!chunk.is_empty());
    }

    #[test]
    fn empty_chunk_reports_empty() {
        let chunk = ChunkBuilder::new("doc-chunk-0").build();
        assert!(chunk.is_empty());
        assert_eq!(chunk.byte_len(), 0);
    }

    #[test]
    fn chunk_record_links_neighbors() {
        let chunk = ChunkBuilder::new("doc-chunk-1")
            .text("middle")
            .byte_range(10, 16)
            .token_count(1)
            .build();
        let record = ChunkRecord {
            chunk,
            document_id: "doc".to_string(),
            source_path: "docs/intro.md".to_string(),
            prev_chunk_id: Some("doc-chunk-0".to_string()),
            next_chunk_id: Some("doc-chunk-2".to_string()),
        };

        assert_eq!(record.prev_chunk_id.as_deref(), Some("doc-chunk-0"));
        assert_eq!(record.next_chunk_id.as_deref(), Some("doc-chunk-2"));
    }
}
