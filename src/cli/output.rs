//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats. Flag names and phrasing here
//! are this binary's surface, not part of the orchestrator contract.

use crate::core::{Chunk, Document};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
    /// Newline-delimited JSON (NDJSON) for streaming.
    Ndjson,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "ndjson" | "jsonl" | "stream" => Self::Ndjson,
            _ => Self::Text,
        }
    }

    /// Returns true if this format is a streaming format.
    #[must_use]
    pub const fn is_streaming(&self) -> bool {
        matches!(self, Self::Ndjson)
    }
}

/// Formats the document list produced by the scan command.
#[must_use]
pub fn format_document_list(documents: &[Document], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_document_list_text(documents),
        OutputFormat::Json | OutputFormat::Ndjson => format_json(&documents),
    }
}

fn format_document_list_text(documents: &[Document]) -> String {
    if documents.is_empty() {
        return "No documents found.\n".to_string();
    }

    let mut output = String::new();
    let _ = writeln!(output, "Found {} document(s):", documents.len());
    for document in documents {
        let _ = writeln!(
            output,
            "  {} — {} ({} section(s), {} link(s))",
            document.relative_path,
            document.title,
            document.sections.len(),
            document.links.len()
        );
    }
    output
}

/// Formats the chunk list produced by the chunk command.
#[must_use]
pub fn format_chunk_list(chunks: &[Chunk], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_chunk_list_text(chunks),
        OutputFormat::Json | OutputFormat::Ndjson => format_json(&chunks),
    }
}

fn format_chunk_list_text(chunks: &[Chunk]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} chunk(s):", chunks.len());
    for chunk in chunks {
        let _ = writeln!(
            output,
            "  [{}] {}..{} ({} tokens)",
            chunk.id, chunk.start_byte, chunk.end_byte, chunk.token_count
        );
    }
    output
}

/// Formats the result of the ignore-test command.
#[must_use]
pub fn format_ignore_result(path: &str, ignored: bool, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            format!(
                "{path}: {}\n",
                if ignored { "ignored" } else { "kept" }
            )
        }
        OutputFormat::Json | OutputFormat::Ndjson => {
            format_json(&serde_json::json!({ "path": path, "ignored": ignored }))
        }
    }
}

/// Formats a byte-producing export as a short summary.
#[must_use]
pub fn format_export_summary(label: &str, bytes: &[u8], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{label}: {} byte(s) written\n", bytes.len()),
        OutputFormat::Json | OutputFormat::Ndjson => {
            format_json(&serde_json::json!({ "format": label, "bytes": bytes.len() }))
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats an error for output.
///
/// When format is JSON, returns a structured error object.
/// When format is Text, returns the error message string.
#[must_use]
pub fn format_error(error: &crate::Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json | OutputFormat::Ndjson => {
            let (error_type, suggestion) = get_error_details(error);
            let json = serde_json::json!({
                "success": false,
                "error": {
                    "type": error_type,
                    "message": error.to_string(),
                    "suggestion": suggestion
                }
            });
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// Extracts error type and recovery suggestion from an error.
const fn get_error_details(error: &crate::Error) -> (&'static str, Option<&'static str>) {
    use crate::error::{ChunkingError, CommandError, ExportError, IoError, ScanError, TokenizerError};

    match error {
        crate::Error::Scan(e) => match e {
            ScanError::EmptyRoot => ("EmptyRoot", Some("Provide a non-empty root path")),
            ScanError::RootNotFound { .. } => ("RootNotFound", Some("Check that the path exists")),
            ScanError::RootNotADirectory { .. } => {
                ("RootNotADirectory", Some("Point at a directory, not a file"))
            }
            ScanError::RootStatFailed { .. } => ("RootStatFailed", None),
        },
        crate::Error::Chunking(e) => match e {
            ChunkingError::InvalidUtf8 { .. } => ("InvalidUtf8", None),
            ChunkingError::InvalidConfig { .. } => ("InvalidConfig", None),
            ChunkingError::OverlapTooLarge { .. } => (
                "OverlapTooLarge",
                Some("Overlap must be strictly less than max_tokens"),
            ),
            ChunkingError::UnknownStrategy { .. } => (
                "UnknownStrategy",
                Some("Valid strategies: fixed, headers, markdown-headers, recursive, semantic"),
            ),
        },
        crate::Error::Export(e) => match e {
            ExportError::Serialization(_) => ("SerializationError", None),
            ExportError::WriteFailed(_) => ("WriteFailed", None),
        },
        crate::Error::Tokenizer(e) => match e {
            TokenizerError::LoadFailed { .. } => {
                ("TokenizerLoadFailed", Some("Verify network/offline asset access"))
            }
        },
        crate::Error::Io(e) => match e {
            IoError::FileNotFound { .. } => ("FileNotFound", Some("Verify the file path exists")),
            IoError::ReadFailed { .. } => ("ReadError", None),
            IoError::WriteFailed { .. } => ("WriteError", None),
            IoError::MmapFailed { .. } => ("MemoryMapError", None),
            IoError::DirectoryFailed { .. } => ("DirectoryError", None),
            IoError::Generic(_) => ("IoError", None),
        },
        crate::Error::Command(e) => match e {
            CommandError::InvalidArgument(_) => ("InvalidArgument", None),
            CommandError::ExecutionFailed(_) => ("ExecutionFailed", None),
            CommandError::Cancelled => ("Cancelled", None),
            CommandError::OutputFormat(_) => ("OutputFormatError", None),
        },
        crate::Error::Config { .. } => ("ConfigError", Some("Check the project YAML file")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_output_format_ndjson() {
        assert_eq!(OutputFormat::parse("ndjson"), OutputFormat::Ndjson);
        assert_eq!(OutputFormat::parse("jsonl"), OutputFormat::Ndjson);
        assert!(OutputFormat::Ndjson.is_streaming());
        assert!(!OutputFormat::Text.is_streaming());
    }

    #[test]
    fn test_format_document_list_empty() {
        let text = format_document_list(&[], OutputFormat::Text);
        assert!(text.contains("No documents found"));
        let json = format_document_list(&[], OutputFormat::Json);
        assert!(json.contains("[]"));
    }

    #[test]
    fn test_format_ignore_result() {
        let text = format_ignore_result("a/b.md", true, OutputFormat::Text);
        assert!(text.contains("ignored"));
        let json = format_ignore_result("a/b.md", false, OutputFormat::Json);
        assert!(json.contains("\"ignored\": false"));
    }

    #[test]
    fn test_format_export_summary() {
        let text = format_export_summary("index", b"hello", OutputFormat::Text);
        assert!(text.contains("5 byte(s)"));
    }
}
