//! Corpus scanner: walks a root directory, applies the ignore matcher,
//! and builds [`Document`]s from every accepted Markdown file.

pub mod frontmatter;
pub mod ignore;
pub mod structure;

pub use ignore::IgnoreMatcher;

use crate::core::Document;
use crate::error::{Error, Result, ScanError};
use frontmatter::{extract_title, strip_frontmatter};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use structure::{extract_code_blocks, extract_links, extract_sections};

/// Walks a root directory and produces [`Document`]s for every accepted
/// Markdown file beneath it.
pub struct Scanner {
    root: PathBuf,
    ignore: IgnoreMatcher,
}

impl Scanner {
    /// Builds a scanner rooted at `root`, applying `ignore` to every
    /// candidate relative path.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::EmptyRoot`], [`ScanError::RootNotFound`], or
    /// [`ScanError::RootNotADirectory`] if `root` is unusable.
    pub fn new(root: impl AsRef<Path>, ignore: IgnoreMatcher) -> Result<Self> {
        let root = root.as_ref();
        let root_str = root.to_string_lossy().to_string();

        if root_str.is_empty() {
            return Err(Error::Scan(ScanError::EmptyRoot));
        }

        let metadata = fs::metadata(root).map_err(|e| {
            Error::Scan(ScanError::RootStatFailed {
                path: root_str.clone(),
                reason: e.to_string(),
            })
        });

        match metadata {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(Error::Scan(ScanError::RootNotADirectory { path: root_str }));
            }
            Err(_) if !root.exists() => {
                return Err(Error::Scan(ScanError::RootNotFound { path: root_str }));
            }
            Err(e) => return Err(e),
        }

        Ok(Self {
            root: root.to_path_buf(),
            ignore,
        })
    }

    /// Walks the root and returns every accepted document, in the order
    /// the directory walk yields them.
    ///
    /// # Errors
    ///
    /// Propagates only if the root itself cannot be walked; per-file
    /// errors are logged and the file is skipped.
    pub fn scan(&self) -> Result<Vec<Document>> {
        let mut candidates = Vec::new();
        walk_markdown_files(&self.root, &mut candidates);

        let accepted: Vec<PathBuf> = candidates
            .into_iter()
            .filter(|path| {
                let relative = relative_slash_path(&self.root, path);
                !self.ignore.should_ignore(&relative)
            })
            .collect();

        let documents: Vec<Document> = accepted
            .par_iter()
            .filter_map(|path| match build_document(&self.root, path) {
                Ok(doc) => Some(doc),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping unreadable file");
                    None
                }
            })
            .collect();

        Ok(documents)
    }

    /// Builds a single [`Document`] from an arbitrary path, ignoring the
    /// ignore matcher (the caller has already made the inclusion
    /// decision explicit by naming the file).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn scan_one(&self, path: impl AsRef<Path>) -> Result<Document> {
        build_document(&self.root, path.as_ref())
    }
}

fn walk_markdown_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable directory");
            return;
        }
    };

    let mut sorted: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
    sorted.sort();

    for path in sorted {
        let file_type = match fs::symlink_metadata(&path) {
            Ok(meta) => meta.file_type(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if file_type.is_dir() {
            walk_markdown_files(&path, out);
        } else if file_type.is_file() && is_markdown_file(&path) {
            out.push(path);
        }
    }
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

fn relative_slash_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}

fn build_document(root: &Path, absolute_path: &Path) -> Result<Document> {
    let relative_path = relative_slash_path(root, absolute_path);
    let raw = crate::io::reader::read_file(absolute_path)?;
    let (frontmatter, body) = strip_frontmatter(&raw);
    let title = extract_title(&frontmatter, &body);
    let sections = extract_sections(&body);
    let links = extract_links(&body);
    let code_blocks = extract_code_blocks(&body);
    let modified = fs::metadata(absolute_path)
        .and_then(|meta| meta.modified())
        .map(|time| {
            time.duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default()
        })
        .unwrap_or_default();

    Ok(Document {
        id: Document::compute_id(&relative_path),
        path: absolute_path.to_path_buf(),
        relative_path,
        title,
        body,
        modified: i64::try_from(modified).unwrap_or(i64::MAX),
        frontmatter: HashMap::new(),
        sections,
        links,
        code_blocks,
    })
}
