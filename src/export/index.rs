//! Index-form exporter (§4.F).
//!
//! Produces a directory-grouped table of contents over the corpus, one
//! bullet per document with a one-line description scraped from its
//! first prose paragraph.

use crate::config::ProjectConfig;
use crate::core::Document;
use std::collections::BTreeMap;
use std::fmt::Write as _;

const DESCRIPTION_MAX_LEN: usize = 100;

/// Builds the index-form export: `llms.txt`.
#[must_use]
pub fn build_index(documents: &[Document], config: &ProjectConfig) -> Vec<u8> {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", config.name);
    let _ = writeln!(out);
    let _ = writeln!(out, "> {}", config.description);
    let _ = writeln!(out);

    let mut by_dir: BTreeMap<String, Vec<&Document>> = BTreeMap::new();
    for document in documents {
        by_dir
            .entry(document.parent_dir().to_string())
            .or_default()
            .push(document);
    }

    for (dir, mut docs) in by_dir {
        docs.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        let heading = if dir.is_empty() || dir == "." {
            "Root".to_string()
        } else {
            dir
        };
        let _ = writeln!(out, "## {heading}");
        let _ = writeln!(out);

        for document in docs {
            let description = describe(document);
            let _ = writeln!(
                out,
                "- [{}]({}): {}",
                document.title, document.relative_path, description
            );
        }
        let _ = writeln!(out);
    }

    out.into_bytes()
}

/// Extracts a one-line description from a document's first prose
/// paragraph, truncating to [`DESCRIPTION_MAX_LEN`] characters.
fn describe(document: &Document) -> String {
    let mut in_fence = false;
    let mut paragraph_lines: Vec<&str> = Vec::new();

    for line in document.body.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if trimmed.is_empty() {
            if !paragraph_lines.is_empty() {
                break;
            }
            continue;
        }
        if trimmed.starts_with('#') {
            continue;
        }
        paragraph_lines.push(trimmed);
    }

    if paragraph_lines.is_empty() {
        return "No description available".to_string();
    }

    let flattened = paragraph_lines.join(" ");
    truncate_description(&flattened)
}

fn truncate_description(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count <= DESCRIPTION_MAX_LEN {
        return text.to_string();
    }
    let truncated: String = text.chars().take(DESCRIPTION_MAX_LEN).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

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

    fn config() -> ProjectConfig {
        ProjectConfig {
            name: "Demo Project".to_string(),
            description: "A demonstration project".to_string(),
            ..ProjectConfig::default()
        }
    }

    #[test]
    fn s4_index_form_layout() {
        let docs = vec![
            document("README.md", "Intro", "# Intro\n\nWelcome to the project."),
            document("guides/setup.md", "Setup", "# Setup\n\nHow to install things."),
        ];
        let bytes = build_index(&docs, &config());
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("# Demo Project\n\n> A demonstration project\n\n"));
        assert!(text.contains("## Root"));
        assert!(text.contains("## guides"));
        assert!(text.contains("- [Intro](README.md): Welcome to the project."));
        assert!(text.contains("- [Setup](guides/setup.md): How to install things."));
    }

    #[test]
    fn description_falls_back_when_no_prose() {
        let document = document("a.md", "A", "# A\n\n```\ncode only\n```\n");
        assert_eq!(describe(&document), "No description available");
    }

    #[test]
    fn description_truncates_long_paragraphs() {
        let long = "word ".repeat(50);
        let document = document("a.md", "A", &format!("# A\n\n{long}"));
        let description = describe(&document);
        assert!(description.ends_with("..."));
        assert_eq!(description.chars().count(), DESCRIPTION_MAX_LEN + 3);
    }

    #[test]
    fn directories_are_grouped_lexicographically() {
        let docs = vec![
            document("z/a.md", "Z", "text"),
            document("a/a.md", "A", "text"),
        ];
        let bytes = build_index(&docs, &config());
        let text = String::from_utf8(bytes).unwrap();
        let a_pos = text.find("## a").unwrap();
        let z_pos = text.find("## z").unwrap();
        assert!(a_pos < z_pos);
    }
}
