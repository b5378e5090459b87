//! Line-delimited (JSONL) exporter (§4.H).
//!
//! Chunks every document with the supplied strategy and emits one
//! compact JSON object per chunk, newline-terminated, in input-document
//! then chunk-ordinal order.

use crate::chunking::Chunker;
use crate::core::{Chunk, Document};
use crate::error::{ExportError, Result};
use crate::tokenizer::Tokenizer;
use serde::Serialize;

#[derive(Serialize)]
struct JsonlRecord<'a> {
    doc_id: &'a str,
    chunk_id: &'a str,
    text: &'a str,
    token_count: usize,
    source: &'a str,
    start_pos: usize,
    end_pos: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    prev_chunk_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_chunk_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vector: Option<&'a [f32]>,
}

impl<'a> JsonlRecord<'a> {
    fn from_chunk(
        document: &'a Document,
        chunk: &'a Chunk,
        prev_chunk_id: Option<&'a str>,
        next_chunk_id: Option<&'a str>,
    ) -> Self {
        Self {
            doc_id: &document.id,
            chunk_id: &chunk.id,
            text: &chunk.text,
            token_count: chunk.token_count,
            source: &document.relative_path,
            start_pos: chunk.start_byte,
            end_pos: chunk.end_byte,
            prev_chunk_id,
            next_chunk_id,
            vector: chunk.vector.as_deref(),
        }
    }
}

/// Builds the line-delimited (JSONL) export.
///
/// # Errors
///
/// Returns an error if chunking a document fails or a chunk record
/// cannot be serialized to JSON.
pub fn build_jsonl(
    documents: &[Document],
    chunker: &dyn Chunker,
    tokenizer: &dyn Tokenizer,
    max_tokens: usize,
    overlap_tokens: usize,
) -> Result<Vec<u8>> {
    let mut out = Vec::new();

    for document in documents {
        let chunks = chunker.chunk(document, tokenizer, max_tokens, overlap_tokens)?;
        let ids: Vec<String> = chunks.iter().map(|c| c.id.clone()).collect();

        for (i, chunk) in chunks.iter().enumerate() {
            let prev = if i == 0 { None } else { Some(ids[i - 1].as_str()) };
            let next = ids.get(i + 1).map(String::as_str);
            let record = JsonlRecord::from_chunk(document, chunk, prev, next);
            let line = serde_json::to_string(&record).map_err(ExportError::from)?;
            out.extend_from_slice(line.as_bytes());
            out.push(b'\n');
        }
    }

    Ok(out)
}
