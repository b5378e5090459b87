//! Document representation for llms-export.
//!
//! A [`Document`] is a parsed Markdown file: its frontmatter-stripped body
//! plus the sections, links, and code blocks extracted from that body.
//! Documents are produced once by the scanner and are immutable afterwards.

use md5::{Digest, Md5};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// A dynamically-typed value parsed from YAML frontmatter.
///
/// Frontmatter yields heterogeneous maps (strings, lists, nested maps);
/// this tagged union lets call sites request a specific shape (e.g. a
/// string for `title`) and fall through on mismatch rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FrontmatterValue {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// A list of values.
    List(Vec<FrontmatterValue>),
    /// A nested string-keyed map.
    Map(HashMap<String, FrontmatterValue>),
}

impl FrontmatterValue {
    /// Returns the value as a string slice, if this is a non-empty string.
    #[must_use]
    pub fn as_non_empty_str(&self) -> Option<&str> {
        match self {
            Self::String(s) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

/// A span of a document introduced by a Markdown heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Lowercased, non-alphanumerics-collapsed-to-`-`, trimmed slug.
    pub slug: String,
    /// The heading text, trimmed.
    pub title: String,
    /// Heading level, 1 through 6.
    pub level: u8,
    /// Body text between this heading and the next, trimmed.
    pub body: String,
    /// Start line number (0-based, inclusive).
    pub start_line: usize,
    /// End line number (0-based, exclusive).
    pub end_line: usize,
}

/// A parsed `[text](url)` occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// The anchor text.
    pub text: String,
    /// The link target.
    pub url: String,
    /// True unless the URL begins with `http://`, `https://`, or `//`.
    pub is_internal: bool,
}

/// A fenced code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    /// Language tag from the opening fence (possibly empty).
    pub language: String,
    /// The literal body, without fences.
    pub body: String,
    /// Start line number (0-based, inclusive).
    pub start_line: usize,
    /// End line number (0-based, exclusive).
    pub end_line: usize,
}

/// A parsed Markdown file, immutable once constructed by the scanner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Stable identity derived from the path relative to the scan root.
    pub id: String,
    /// Absolute filesystem path.
    pub path: PathBuf,
    /// Forward-slash-normalized path relative to the scan root.
    pub relative_path: String,
    /// Document title (frontmatter, else first H1, else "Untitled").
    pub title: String,
    /// Raw byte body with any frontmatter block removed.
    pub body: String,
    /// Unix timestamp of the file's last modification.
    pub modified: i64,
    /// Frontmatter key-value mapping (empty if no frontmatter was present).
    pub frontmatter: HashMap<String, FrontmatterValue>,
    /// Sections in document order.
    pub sections: Vec<Section>,
    /// Links in document order.
    pub links: Vec<Link>,
    /// Code blocks in document order.
    pub code_blocks: Vec<CodeBlock>,
}

impl Document {
    /// Computes the stable document identity for a relative path.
    ///
    /// Uses the hex digest of MD5 over the relative path; any
    /// collision-resistant, deterministic function would satisfy the
    /// contract, but MD5 keeps identities short and matches the identity
    /// scheme documented for this corpus.
    #[must_use]
    pub fn compute_id(relative_path: &str) -> String {
        let digest = Md5::digest(relative_path.as_bytes());
        format!("{digest:x}")
    }

    /// Returns the first section, if any.
    #[must_use]
    pub fn first_section(&self) -> Option<&Section> {
        self.sections.first()
    }

    /// Returns the document's basename (last path component of `relative_path`).
    #[must_use]
    pub fn basename(&self) -> &str {
        self.relative_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.relative_path)
    }

    /// Returns the parent directory of `relative_path`, or `""` at the root.
    #[must_use]
    pub fn parent_dir(&self) -> &str {
        match self.relative_path.rfind('/') {
            Some(idx) => &self.relative_path[..idx],
            None => "",
        }
    }

    /// True if the basename case-insensitively equals `readme.md`.
    #[must_use]
    pub fn is_readme(&self) -> bool {
        self.basename().eq_ignore_ascii_case("readme.md")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(relative_path: &str, body: &str) -> Document {
        Document {
            id: Document::compute_id(relative_path),
            path: PathBuf::from(format!("/root/{relative_path}")),
            relative_path: relative_path.to_string(),
            title: "Title".to_string(),
            body: body.to_string(),
            modified: 0,
            frontmatter: HashMap::new(),
            sections: Vec::new(),
            links: Vec::new(),
            code_blocks: Vec::new(),
        }
    }

    #[test]
    fn compute_id_is_stable() {
        let a = Document::compute_id("docs/intro.md");
        let b = Document::compute_id("docs/intro.md");
        assert_eq!(a, b);
    }

    #[test]
    fn compute_id_differs_by_path() {
        let a = Document::compute_id("docs/intro.md");
        let b = Document::compute_id("docs/other.md");
        assert_ne!(a, b);
    }

    #[test]
    fn basename_and_parent_dir() {
        let d = doc("docs/guide/intro.md", "body");
        assert_eq!(d.basename(), "intro.md");
        assert_eq!(d.parent_dir(), "docs/guide");

        let root_doc = doc("README.md", "body");
        assert_eq!(root_doc.basename(), "README.md");
        assert_eq!(root_doc.parent_dir(), "");
    }

    #[test]
    fn is_readme_is_case_insensitive() {
        assert!(doc("README.md", "").is_readme());
        assert!(doc("readme.md", "").is_readme());
        assert!(doc("docs/ReadMe.md", "").is_readme());
        assert!(!doc("docs/intro.md", "").is_readme());
    }

    #[test]
    fn frontmatter_value_non_empty_str() {
        assert_eq!(
            FrontmatterValue::String("hi".to_string()).as_non_empty_str(),
            Some("hi")
        );
        assert_eq!(
            FrontmatterValue::String(String::new()).as_non_empty_str(),
            None
        );
        assert_eq!(FrontmatterValue::Bool(true).as_non_empty_str(), None);
    }
}
