//! OpenAI-compatible byte-pair tokenization.
//!
//! The production tokenizer wraps `tiktoken-rs`'s `cl100k_base` table,
//! the encoding shared by contemporary OpenAI chat models. A `Tokenizer`
//! trait (mirroring the shape of [`crate::chunking::Chunker`]: one
//! behavior-defining trait, one production implementation) lets tests
//! substitute a deterministic counter instead of loading the real table.

use crate::error::{Result, TokenizerError};
use tiktoken_rs::CoreBPE;

/// Capability interface for encoding text into tokens and counting them.
///
/// Implementations must be safe for concurrent `encode`/`count` calls,
/// since the tokenizer is shared read-only across chunking strategies
/// and exporters for the duration of an export run.
pub trait Tokenizer: Send + Sync {
    /// Encodes `text` into a sequence of token ids.
    fn encode(&self, text: &str) -> Vec<u32>;

    /// Counts the number of tokens `text` encodes to.
    fn count(&self, text: &str) -> usize {
        self.encode(text).len()
    }
}

/// Production tokenizer backed by the `cl100k_base` byte-pair encoding.
pub struct Cl100kTokenizer {
    bpe: CoreBPE,
}

impl Cl100kTokenizer {
    /// Loads the `cl100k_base` encoding table.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::LoadFailed`] if the table cannot be
    /// loaded. This is fatal: no export proceeds without a tokenizer.
    pub fn new() -> Result<Self> {
        let bpe = tiktoken_rs::cl100k_base().map_err(|err| TokenizerError::LoadFailed {
            encoding: "cl100k_base".to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self { bpe })
    }
}

impl Tokenizer for Cl100kTokenizer {
    fn encode(&self, text: &str) -> Vec<u32> {
        self.bpe.encode_with_special_tokens(text)
    }
}
