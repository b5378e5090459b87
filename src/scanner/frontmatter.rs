//! YAML frontmatter detection and title extraction.
//!
//! Full YAML parsing of frontmatter is intentionally out of scope here;
//! the contract is presence detection and stripping only (§9 open
//! questions). `Document::frontmatter` therefore stays empty even when a
//! frontmatter block was found and removed.

use crate::core::FrontmatterValue;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").expect("static regex is valid"));

/// Strips a leading `---\n ... \n---\n` frontmatter block, if present.
///
/// Returns the (possibly empty) frontmatter mapping and the remaining
/// body. If the opening or closing delimiter is missing, the body is
/// returned unchanged with an empty mapping.
#[must_use]
pub fn strip_frontmatter(raw: &str) -> (HashMap<String, FrontmatterValue>, String) {
    let Some(after_open) = raw.strip_prefix("---\n") else {
        return (HashMap::new(), raw.to_string());
    };

    let Some(close_idx) = after_open.find("\n---\n") else {
        return (HashMap::new(), raw.to_string());
    };

    let body = after_open[close_idx + "\n---\n".len()..].to_string();
    (HashMap::new(), body)
}

/// Extracts the document title: frontmatter `title`, else first H1, else
/// the literal `"Untitled"`.
#[must_use]
pub fn extract_title(frontmatter: &HashMap<String, FrontmatterValue>, body: &str) -> String {
    if let Some(title) = frontmatter.get("title").and_then(FrontmatterValue::as_non_empty_str) {
        return title.to_string();
    }

    if let Some(captures) = H1_RE.captures(body) {
        let text = captures[1].trim();
        if !text.is_empty() {
            return text.to_string();
        }
    }

    "Untitled".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_well_formed_frontmatter() {
        let raw = "---\ntitle: Hi\n---\nBody text.";
        let (fm, body) = strip_frontmatter(raw);
        assert!(fm.is_empty());
        assert_eq!(body, "Body text.");
    }

    #[test]
    fn missing_opening_delimiter_leaves_body_unchanged() {
        let raw = "Body text.\n---\nmore\n---\n";
        let (fm, body) = strip_frontmatter(raw);
        assert!(fm.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn missing_closing_delimiter_leaves_body_unchanged() {
        let raw = "---\ntitle: Hi\nBody without closer.";
        let (fm, body) = strip_frontmatter(raw);
        assert!(fm.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn title_falls_back_to_first_h1() {
        let body = "Some preamble\n# The Title\n\nMore text.";
        let title = extract_title(&HashMap::new(), body);
        assert_eq!(title, "The Title");
    }

    #[test]
    fn title_falls_back_to_untitled() {
        let body = "No heading here, just text.";
        let title = extract_title(&HashMap::new(), body);
        assert_eq!(title, "Untitled");
    }

    #[test]
    fn title_prefers_frontmatter() {
        let mut fm = HashMap::new();
        fm.insert(
            "title".to_string(),
            FrontmatterValue::String("From Frontmatter".to_string()),
        );
        let body = "# Ignored Heading";
        assert_eq!(extract_title(&fm, body), "From Frontmatter");
    }

    #[test]
    fn empty_frontmatter_title_falls_through() {
        let mut fm = HashMap::new();
        fm.insert("title".to_string(), FrontmatterValue::String(String::new()));
        let body = "# Heading Wins";
        assert_eq!(extract_title(&fm, body), "Heading Wins");
    }
}
