//! On-disk project configuration (§6.1).
//!
//! A YAML document providing the project header material, scan inputs,
//! ignore patterns, output location, and chunking defaults. Unknown
//! keys are ignored rather than rejected.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default maximum tokens per chunk (`llm.chunk_size`).
pub const DEFAULT_CHUNK_SIZE: usize = 512;

/// Default overlap tokens between chunks (`llm.overlap`).
pub const DEFAULT_OVERLAP: usize = 128;

/// Name and description used as the export header material (§3
/// `ProjectConfig`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Project name, used as the `#` heading of the index and full forms.
    #[serde(default = "default_project_name")]
    pub name: String,
    /// Project description, used as the `>` blockquote line.
    #[serde(default)]
    pub description: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            description: String::new(),
        }
    }
}

fn default_project_name() -> String {
    "Untitled Project".to_string()
}

/// `input` section of the on-disk configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    /// Root paths to scan for Markdown files.
    #[serde(default)]
    pub paths: Vec<String>,
    /// Gitignore-style patterns excluded from scanning.
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// `output` section of the on-disk configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory the index and full forms are written to.
    #[serde(default)]
    pub path: String,
}

/// `llm` section of the on-disk configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LlmConfig {
    /// Maximum tokens per chunk.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Target trailing-token overlap between chunks.
    #[serde(default = "default_overlap")]
    pub overlap: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

const fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

const fn default_overlap() -> usize {
    DEFAULT_OVERLAP
}

/// `features` section of the on-disk configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FeaturesConfig {
    /// Whether LLM export is enabled at all.
    #[serde(default = "default_llm_export")]
    pub llm_export: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            llm_export: default_llm_export(),
        }
    }
}

const fn default_llm_export() -> bool {
    true
}

/// The full on-disk project configuration document.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ProjectFile {
    /// Project name/description header material.
    #[serde(default)]
    pub project: ProjectConfig,
    /// Scan input configuration.
    #[serde(default)]
    pub input: InputConfig,
    /// Export output configuration.
    #[serde(default)]
    pub output: OutputConfig,
    /// Chunking defaults.
    #[serde(default)]
    pub llm: LlmConfig,
    /// Feature toggles.
    #[serde(default)]
    pub features: FeaturesConfig,
}

impl ProjectFile {
    /// Parses a project configuration document from YAML text. Unknown
    /// keys are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not valid YAML or does not match
    /// the expected shape.
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| Error::Config {
            message: format!("invalid project configuration: {e}"),
        })
    }

    /// Reads and parses a project configuration document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_yaml(&text)
    }
}
