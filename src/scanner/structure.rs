//! Structural extraction: sections, links, and fenced code blocks.
//!
//! Three pattern families drive this module — heading lines, link
//! syntax, and fence toggles — each fixed in surface behavior, not
//! implementation; `regex` is used here the way the rest of the crate
//! uses it for line-oriented scanning.

use crate::core::{CodeBlock, Link, Section};
use regex::Regex;
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("static regex is valid"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("static regex is valid"));
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```(\w*)$").expect("static regex is valid"));

/// Extracts heading-delimited sections from a document body.
#[must_use]
pub fn extract_sections(body: &str) -> Vec<Section> {
    let lines: Vec<&str> = body.lines().collect();
    let mut sections = Vec::new();
    let mut open: Option<(usize, u8, String)> = None;
    let mut body_lines: Vec<&str> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if let Some(captures) = HEADING_RE.captures(line) {
            if let Some((start_line, level, title)) = open.take() {
                sections.push(finish_section(start_line, i, level, title, &body_lines));
            }
            body_lines.clear();
            let level = u8::try_from(captures[1].len()).unwrap_or(6);
            open = Some((i, level, captures[2].trim().to_string()));
        } else if open.is_some() {
            body_lines.push(line);
        }
    }

    if let Some((start_line, level, title)) = open {
        sections.push(finish_section(start_line, lines.len(), level, title, &body_lines));
    }

    sections
}

fn finish_section(start_line: usize, end_line: usize, level: u8, title: String, body_lines: &[&str]) -> Section {
    Section {
        slug: slugify_collapsed(&title),
        title,
        level,
        body: body_lines.join("\n").trim().to_string(),
        start_line,
        end_line,
    }
}

/// Lowercases `s`, collapses each run of non-alphanumeric characters to a
/// single `-`, and trims leading/trailing `-`.
#[must_use]
pub fn slugify_collapsed(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_dash = false;
    for ch in s.to_lowercase().chars() {
        if ch.is_alphanumeric() {
            out.push(ch);
            prev_dash = false;
        } else if !prev_dash {
            out.push('-');
            prev_dash = true;
        }
    }
    out.trim_matches('-').to_string()
}

/// Extracts all `[text](url)` links from a document body.
#[must_use]
pub fn extract_links(body: &str) -> Vec<Link> {
    LINK_RE
        .captures_iter(body)
        .map(|captures| {
            let text = captures[1].to_string();
            let url = captures[2].to_string();
            let is_internal = !(url.starts_with("http://")
                || url.starts_with("https://")
                || url.starts_with("//"));
            Link {
                text,
                url,
                is_internal,
            }
        })
        .collect()
}

/// Extracts fenced code blocks from a document body.
#[must_use]
pub fn extract_code_blocks(body: &str) -> Vec<CodeBlock> {
    let lines: Vec<&str> = body.lines().collect();
    let mut blocks = Vec::new();
    let mut open: Option<(usize, String)> = None;
    let mut content_lines: Vec<&str> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if let Some(captures) = FENCE_RE.captures(line) {
            match open.take() {
                Some((start_line, language)) => {
                    blocks.push(CodeBlock {
                        language,
                        body: content_lines.join("\n"),
                        start_line,
                        end_line: i + 1,
                    });
                    content_lines.clear();
                }
                None => {
                    open = Some((i, captures[1].to_string()));
                }
            }
        } else if open.is_some() {
            content_lines.push(line);
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_sections_basic() {
        let body = "# A\n\nalpha.\n\n## B\n\nbeta.\n\n### C\n\ngamma.";
        let sections = extract_sections(body);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, "A");
        assert_eq!(sections[0].level, 1);
        assert_eq!(sections[0].body, "alpha.");
        assert_eq!(sections[1].title, "B");
        assert_eq!(sections[1].level, 2);
        assert_eq!(sections[2].title, "C");
        assert_eq!(sections[2].level, 3);
        assert_eq!(sections[2].body, "gamma.");
    }

    #[test]
    fn extract_sections_empty_without_headings() {
        assert!(extract_sections("just text, no headings").is_empty());
    }

    #[test]
    fn slugify_collapses_and_trims() {
        assert_eq!(slugify_collapsed("Hello, World!"), "hello-world");
        assert_eq!(slugify_collapsed("  Leading and Trailing  "), "leading-and-trailing");
        assert_eq!(slugify_collapsed("multiple   spaces"), "multiple-spaces");
    }

    #[test]
    fn extract_links_flags_internal_and_external() {
        let body = "See [docs](./docs/intro.md) and [site](https://example.com).";
        let links = extract_links(body);
        assert_eq!(links.len(), 2);
        assert!(links[0].is_internal);
        assert_eq!(links[0].url, "./docs/intro.md");
        assert!(!links[1].is_internal);
    }

    #[test]
    fn extract_links_protocol_relative_is_external() {
        let body = "[cdn](//cdn.example.com/a.js)";
        let links = extract_links(body);
        assert!(!links[0].is_internal);
    }

    #[test]
    fn extract_code_blocks_with_language() {
        let body = "text\n```rust\nfn main() {}\n```\nmore text";
        let blocks = extract_code_blocks(body);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language, "rust");
        assert_eq!(blocks[0].body, "fn main() {}");
    }

    #[test]
    fn extract_code_blocks_without_language() {
        let body = "```\nplain\n```";
        let blocks = extract_code_blocks(body);
        assert_eq!(blocks[0].language, "");
        assert_eq!(blocks[0].body, "plain");
    }

    #[test]
    fn extract_code_blocks_unterminated_is_ignored() {
        let body = "```rust\nfn main() {}";
        assert!(extract_code_blocks(body).is_empty());
    }

    #[test]
    fn extract_code_blocks_multiple() {
        let body = "```a\none\n```\ntext\n```b\ntwo\n```";
        let blocks = extract_code_blocks(body);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].language, "a");
        assert_eq!(blocks[1].language, "b");
    }
}
