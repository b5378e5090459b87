//! Full-form exporter (§4.G).
//!
//! Concatenates every document body, README-first then path-lexicographic,
//! separated by a horizontal-rule marker. Warns once via the observability
//! sink if the assembled output exceeds 1 MiB, but never truncates.

use crate::config::ProjectConfig;
use crate::core::Document;
use std::fmt::Write as _;

/// Full-form output larger than this many bytes triggers a single
/// observability warning (still returned in full).
const OVERSIZE_THRESHOLD: usize = 1_048_576;

/// Builds the full-form export: `llms-full.txt`.
#[must_use]
pub fn build_full(documents: &[Document], config: &ProjectConfig) -> Vec<u8> {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", config.name);
    let _ = writeln!(out);
    let _ = writeln!(out, "> {}", config.description);
    let _ = writeln!(out);

    let mut ordered: Vec<&Document> = documents.iter().collect();
    ordered.sort_by(|a, b| match (a.is_readme(), b.is_readme()) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.relative_path.cmp(&b.relative_path),
    });

    for (i, document) in ordered.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out, "---\n");
        }
        let _ = writeln!(out, "# {}", document.title);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", document.body);
        let _ = writeln!(out);
    }

    let bytes = out.into_bytes();
    if bytes.len() > OVERSIZE_THRESHOLD {
        tracing::warn!(
            bytes = bytes.len(),
            threshold = OVERSIZE_THRESHOLD,
            "full-form export exceeds the recommended size"
        );
    }
    bytes
}
