//! Error types for llms-export operations.
//!
//! This module provides a comprehensive error hierarchy using `thiserror` for
//! all llms-export operations: scanning, tokenizing, chunking, exporting, and
//! CLI commands.

use thiserror::Error;

/// Result type alias for llms-export operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for llms-export operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Corpus-scanning errors (directory walking, frontmatter, structure extraction).
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// Chunking-related errors (text processing).
    #[error("chunking error: {0}")]
    Chunking(#[from] ChunkingError),

    /// Export-related errors (index/full/jsonl/markdown generation).
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// Tokenizer initialization or encoding errors.
    #[error("tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Scanner-specific errors.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The configured scan root is an empty string.
    #[error("scan root must not be empty")]
    EmptyRoot,

    /// The configured scan root does not exist.
    #[error("scan root does not exist: {path}")]
    RootNotFound {
        /// Path that does not exist.
        path: String,
    },

    /// The configured scan root exists but is not a directory.
    #[error("scan root is not a directory: {path}")]
    RootNotADirectory {
        /// Path that is not a directory.
        path: String,
    },

    /// Failed to stat the scan root (fatal; distinct from per-file errors).
    #[error("failed to stat scan root {path}: {reason}")]
    RootStatFailed {
        /// Path that could not be stat'd.
        path: String,
        /// Underlying reason.
        reason: String,
    },
}

/// Chunking-specific errors for text processing.
#[derive(Error, Debug)]
pub enum ChunkingError {
    /// Invalid UTF-8 encountered at specific byte offset.
    #[error("invalid UTF-8 at byte offset {offset}")]
    InvalidUtf8 {
        /// Byte offset where invalid UTF-8 was found.
        offset: usize,
    },

    /// Invalid chunk configuration.
    #[error("invalid chunk configuration: {reason}")]
    InvalidConfig {
        /// Reason the configuration is invalid.
        reason: String,
    },

    /// Overlap exceeds or equals max_tokens.
    #[error("overlap {overlap} must be less than max_tokens {max_tokens}")]
    OverlapTooLarge {
        /// Overlap size in tokens.
        overlap: usize,
        /// Max tokens per chunk.
        max_tokens: usize,
    },

    /// Unknown chunking strategy.
    #[error("unknown chunking strategy: {name} (expected one of: {available})")]
    UnknownStrategy {
        /// Name of the unknown strategy.
        name: String,
        /// Comma-separated list of supported strategy names.
        available: String,
    },
}

/// Export-specific errors.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Serialization to JSON failed for a chunk record.
    #[error("failed to serialize chunk record: {0}")]
    Serialization(String),

    /// Write to the caller's output sink failed.
    #[error("failed to write export output: {0}")]
    WriteFailed(String),
}

/// Tokenizer-specific errors.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// The byte-pair encoding table failed to load.
    #[error("failed to load tokenizer encoding {encoding}: {reason}")]
    LoadFailed {
        /// Name of the requested encoding.
        encoding: String,
        /// Underlying reason for the failure.
        reason: String,
    },
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),

    /// Operation was cancelled via the caller's cancellation signal.
    #[error("operation cancelled")]
    Cancelled,

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

// Implement From traits for standard library and third-party errors.

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<regex::Error> for ChunkingError {
    fn from(err: regex::Error) -> Self {
        Self::InvalidConfig {
            reason: format!("regex error: {err}"),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for ChunkingError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::InvalidUtf8 {
            offset: err.utf8_error().valid_up_to(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_config_display() {
        let err = Error::Config {
            message: "bad config".to_string(),
        };
        assert_eq!(err.to_string(), "configuration error: bad config");
    }

    #[test]
    fn test_scan_error_display() {
        let err = ScanError::EmptyRoot;
        assert_eq!(err.to_string(), "scan root must not be empty");

        let err = ScanError::RootNotFound {
            path: "/no/such/dir".to_string(),
        };
        assert!(err.to_string().contains("/no/such/dir"));
    }

    #[test]
    fn test_chunking_error_display() {
        let err = ChunkingError::OverlapTooLarge {
            overlap: 100,
            max_tokens: 50,
        };
        assert_eq!(
            err.to_string(),
            "overlap 100 must be less than max_tokens 50"
        );

        let err = ChunkingError::UnknownStrategy {
            name: "bogus".to_string(),
            available: "fixed, headers, recursive, semantic".to_string(),
        };
        assert!(err.to_string().contains("bogus"));
        assert!(err.to_string().contains("fixed"));
    }

    #[test]
    fn test_io_error_display() {
        let err = IoError::FileNotFound {
            path: "/tmp/test.txt".to_string(),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/test.txt");
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::Cancelled;
        assert_eq!(err.to_string(), "operation cancelled");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_scan() {
        let err: Error = ScanError::EmptyRoot.into();
        assert!(matches!(err, Error::Scan(_)));
    }

    #[test]
    fn test_error_from_chunking() {
        let err: Error = ChunkingError::InvalidUtf8 { offset: 0 }.into();
        assert!(matches!(err, Error::Chunking(_)));
    }

    #[test]
    fn test_error_from_export() {
        let err: Error = ExportError::WriteFailed("disk full".to_string()).into();
        assert!(matches!(err, Error::Export(_)));
    }

    #[test]
    fn test_error_from_tokenizer() {
        let err: Error = TokenizerError::LoadFailed {
            encoding: "cl100k_base".to_string(),
            reason: "network".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Tokenizer(_)));
    }

    #[test]
    fn test_from_serde_json_error_to_export_error() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: ExportError = json_err.into();
        assert!(matches!(err, ExportError::Serialization(_)));
    }

    #[test]
    fn test_from_string_utf8_error_to_chunking_error() {
        let invalid_bytes = vec![0xff, 0xfe];
        let utf8_err = String::from_utf8(invalid_bytes).unwrap_err();
        let err: ChunkingError = utf8_err.into();
        assert!(matches!(err, ChunkingError::InvalidUtf8 { .. }));
    }
}
