//! Orchestrator (§4.J): glue bindings external collaborators call.
//!
//! Each entry point wires the scanner's output through a chunking
//! strategy into one of the four exporters. Every function is pure
//! given its inputs, except [`build_full`]'s oversize observability
//! warning.

use crate::chunking::create_chunker;
use crate::config::ProjectConfig;
use crate::core::Document;
use crate::error::Result;
use crate::export;
use crate::tokenizer::Tokenizer;

/// Builds the index-form export (§4.F).
#[must_use]
pub fn build_index(documents: &[Document], config: &ProjectConfig) -> Vec<u8> {
    export::build_index(documents, config)
}

/// Builds the full-form export (§4.G).
#[must_use]
pub fn build_full(documents: &[Document], config: &ProjectConfig) -> Vec<u8> {
    export::build_full(documents, config)
}

/// Builds the line-delimited (JSONL) export (§4.E + §4.H).
///
/// # Errors
///
/// Returns an error if `strategy_name` is not a recognized chunking
/// strategy or if chunking a document fails.
pub fn build_jsonl(
    documents: &[Document],
    tokenizer: &dyn Tokenizer,
    strategy_name: &str,
    max_tokens: usize,
    overlap_tokens: usize,
) -> Result<Vec<u8>> {
    let chunker = create_chunker(strategy_name)?;
    chunker.validate(max_tokens, overlap_tokens)?;
    export::build_jsonl(documents, chunker.as_ref(), tokenizer, max_tokens, overlap_tokens)
}

/// Builds the enriched-Markdown export (§4.I).
#[must_use]
pub fn build_markdown(documents: &[Document], tokenizer: &dyn Tokenizer) -> Vec<u8> {
    export::build_markdown(documents, tokenizer)
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

    fn document(relative_path: &str, title: &str, body: &str) -> Document {
        Document {
            id: Document::compute_id(relative_path),
            path: PathBuf::from(relative_path),
            relative_path: relative_path.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            modified: 0,
            frontmatter: HashMap::new(),
            sections: Vec::new(),
            links: Vec::new(),
            code_blocks: Vec::new(),
        }
    }

    #[test]
    fn build_jsonl_rejects_unknown_strategy() {
        let tokenizer = WordTokenizer;
        let docs = vec![document("a.md", "A", "hello")];
        let result = build_jsonl(&docs, &tokenizer, "nonexistent", 50, 10);
        assert!(result.is_err());
    }

    #[test]
    fn build_jsonl_rejects_overlap_at_or_above_max() {
        let tokenizer = WordTokenizer;
        let body = "word ".repeat(200);
        let docs = vec![document("a.md", "A", &body)];
        let result = build_jsonl(&docs, &tokenizer, "fixed", 50, 50);
        assert!(result.is_err());
    }

    #[test]
    fn build_jsonl_happy_path() {
        let tokenizer = WordTokenizer;
        let body = "word ".repeat(200);
        let docs = vec![document("a.md", "A", &body)];
        let bytes = build_jsonl(&docs, &tokenizer, "fixed", 50, 10).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn build_index_and_full_round_trip_config() {
        let config = ProjectConfig {
            name: "Demo".to_string(),
            description: "desc".to_string(),
        };
        let docs = vec![document("README.md", "README", "# README\n\nHello.")];
        let index = build_index(&docs, &config);
        let full = build_full(&docs, &config);
        assert!(String::from_utf8(index).unwrap().starts_with("# Demo"));
        assert!(String::from_utf8(full).unwrap().starts_with("# Demo"));
    }

    #[test]
    fn build_markdown_produces_output() {
        let tokenizer = WordTokenizer;
        let docs = vec![document("a.md", "A", "# A\n\nhello")];
        let bytes = build_markdown(&docs, &tokenizer);
        assert!(String::from_utf8(bytes).unwrap().contains("Table of Contents"));
    }
}
