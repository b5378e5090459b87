//! Chunking strategies for llms-export.
//!
//! This module provides a trait-based system for splitting a document's
//! body into token-bounded chunks. Multiple strategies are available:
//!
//! - **fixed**: token-bounded splitting with word-boundary back-off and overlap
//! - **headers**: splits at Markdown headings, falling back to `fixed` per oversize section
//! - **recursive**: hierarchical separator splitting (`\n\n`, `\n`, ` `, then raw)
//! - **semantic**: reserved fallback capability, currently delegates to `fixed`

pub mod fixed;
pub mod headers;
pub mod recursive;
pub mod semantic;
pub mod traits;
pub mod util;

pub use fixed::FixedChunker;
pub use headers::HeaderChunker;
pub use recursive::RecursiveChunker;
pub use semantic::SemanticChunker;
pub use traits::Chunker;

/// Creates a chunker by strategy name.
///
/// Matching is case-sensitive. `"markdown-headers"` is an alias for
/// `"headers"`.
///
/// # Errors
///
/// Returns [`crate::error::ChunkingError::UnknownStrategy`] if the
/// strategy name is not recognized.
pub fn create_chunker(name: &str) -> crate::error::Result<Box<dyn Chunker>> {
    match name {
        "fixed" => Ok(Box::new(FixedChunker::new())),
        "headers" | "markdown-headers" => Ok(Box::new(HeaderChunker::new())),
        "recursive" => Ok(Box::new(RecursiveChunker::new())),
        "semantic" => Ok(Box::new(SemanticChunker::new())),
        _ => Err(crate::error::ChunkingError::UnknownStrategy {
            name: name.to_string(),
            available: available_strategies().join(", "),
        }
        .into()),
    }
}

/// Lists the canonical chunking strategy names (excluding aliases).
#[must_use]
pub fn available_strategies() -> Vec<&'static str> {
    vec!["fixed", "headers", "recursive", "semantic"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_chunker_fixed() {
        let chunker = create_chunker("fixed").unwrap();
        assert_eq!(chunker.name(), "fixed");
    }

    #[test]
    fn create_chunker_headers_and_alias() {
        assert_eq!(create_chunker("headers").unwrap().name(), "headers");
        assert_eq!(
            create_chunker("markdown-headers").unwrap().name(),
            "headers"
        );
    }

    #[test]
    fn create_chunker_recursive() {
        let chunker = create_chunker("recursive").unwrap();
        assert_eq!(chunker.name(), "recursive");
    }

    #[test]
    fn create_chunker_semantic() {
        let chunker = create_chunker("semantic").unwrap();
        assert_eq!(chunker.name(), "semantic");
    }

    #[test]
    fn create_chunker_unknown() {
        assert!(create_chunker("unknown").is_err());
    }

    #[test]
    fn create_chunker_is_case_sensitive() {
        assert!(create_chunker("FIXED").is_err());
        assert!(create_chunker("Headers").is_err());
    }

    #[test]
    fn available_strategies_lists_canonical_names() {
        let strategies = available_strategies();
        assert_eq!(strategies.len(), 4);
        assert!(strategies.contains(&"fixed"));
        assert!(strategies.contains(&"headers"));
        assert!(strategies.contains(&"recursive"));
        assert!(strategies.contains(&"semantic"));
        assert!(!strategies.contains(&"markdown-headers"));
    }
}
