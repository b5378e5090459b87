//! Enriched-Markdown exporter (§4.I).
//!
//! Emits a table of contents followed by every document as a YAML
//! frontmatter block plus its verbatim body, in input order.

use crate::core::Document;
use crate::tokenizer::Tokenizer;
use chrono::{DateTime, Utc};
use std::fmt::Write as _;

/// Builds the enriched-Markdown export.
#[must_use]
pub fn build_markdown(documents: &[Document], tokenizer: &dyn Tokenizer) -> Vec<u8> {
    let mut out = String::new();
    let _ = writeln!(out, "## Table of Contents");
    let _ = writeln!(out);

    for document in documents {
        let _ = writeln!(out, "- [{}](#{})", document.title, toc_slug(&document.title));
        for section in &document.sections {
            if section.level <= 2 {
                let _ = writeln!(
                    out,
                    "  - [{}](#{})",
                    section.title,
                    toc_slug(&section.title)
                );
            }
        }
    }

    for (i, document) in documents.iter().enumerate() {
        if i > 0 {
            let _ = write!(out, "\n\n---\n\n");
        } else {
            let _ = writeln!(out);
        }
        let _ = write!(out, "{}", frontmatter_block(document, tokenizer));
        let _ = write!(out, "{}", document.body);
        let _ = write!(out, "{}", contextual_enrichment(document));
    }

    out.into_bytes()
}

fn frontmatter_block(document: &Document, tokenizer: &dyn Tokenizer) -> String {
    let section = document
        .first_section()
        .map_or_else(|| document.title.clone(), |s| s.title.clone());
    let modified = DateTime::<Utc>::from_timestamp(document.modified, 0)
        .unwrap_or_else(|| DateTime::<Utc>::from_timestamp(0, 0).unwrap_or_default());

    let mut out = String::new();
    let _ = writeln!(out, "---");
    let _ = writeln!(out, "source: {}", yaml_scalar(&document.relative_path));
    let _ = writeln!(out, "section: {}", yaml_scalar(&section));
    let _ = writeln!(out, "chunk_id: {}", yaml_scalar(&document.id));
    let _ = writeln!(out, "token_count: {}", tokenizer.count(&document.body));
    let _ = writeln!(out, "modified: {}", modified.to_rfc3339());
    let _ = writeln!(out, "---");
    out
}

/// Quotes a YAML scalar when it contains characters that would otherwise
/// change its parsed type or break flow syntax.
fn yaml_scalar(value: &str) -> String {
    if value.is_empty()
        || value.contains([':', '#', '\n'])
        || value.starts_with(['\'', '"', '-', '[', '{'])
    {
        format!("{value:?}")
    } else {
        value.to_string()
    }
}

/// The enriched-Markdown table-of-contents slug: lowercase, spaces to
/// `-`, drop every character outside `[a-z0-9-]`. Distinct from
/// [`crate::scanner::structure::slugify_collapsed`], which collapses
/// runs of non-alphanumerics instead of dropping them.
fn toc_slug(title: &str) -> String {
    title
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Placeholder extension point for future per-document enrichment
/// content appended after the body. Always returns empty in this core.
fn contextual_enrichment(_document: &Document) -> String {
    String::new()
}
