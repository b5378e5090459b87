//! Gitignore-style path exclusion for the corpus scanner.
//!
//! `IgnoreMatcher` implements the pattern family documented for this
//! corpus rather than delegating to a general-purpose gitignore crate:
//! match priority here is first-pattern-wins (not gitignore's
//! last-match-wins), and the wildcard/anchoring rules are a proper
//! subset of gitignore's, so a general implementation would silently
//! diverge on the cases this module tests for directly.

/// Decides whether a relative path should be excluded from the corpus.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    patterns: Vec<String>,
}

impl IgnoreMatcher {
    /// Builds a matcher from an ordered pattern list. Order matters: the
    /// first pattern that matches a path wins.
    #[must_use]
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// An empty matcher, which accepts every path.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns true if `relative_path` matches any configured pattern.
    ///
    /// `relative_path` is normalized to forward slashes before matching.
    #[must_use]
    pub fn should_ignore(&self, relative_path: &str) -> bool {
        let normalized = relative_path.replace('\\', "/");
        self.patterns
            .iter()
            .any(|pattern| pattern_matches(pattern, &normalized))
    }
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    if pattern == path {
        return true;
    }

    if let Some(prefix) = pattern.strip_suffix('/') {
        return path == prefix || path.starts_with(&format!("{prefix}/"));
    }

    if let Some(suffix) = pattern.strip_prefix("**/") {
        if pattern == "**/.*/**" {
            return has_hidden_segment(path);
        }
        return contiguous_subpaths(path)
            .iter()
            .any(|sub| wildcard_match(suffix, sub));
    }

    if let Some(prefix) = pattern.strip_suffix("/**") {
        return path == prefix || path.starts_with(&format!("{prefix}/"));
    }

    if pattern.contains('*') {
        let basename = path.rsplit('/').next().unwrap_or(path);
        if wildcard_match(pattern, basename) {
            return true;
        }
        return contiguous_subpaths(path)
            .iter()
            .any(|sub| wildcard_match(pattern, sub));
    }

    ancestor_subpaths(path).iter().any(|sub| sub == pattern)
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn contiguous_subpaths(path: &str) -> Vec<String> {
    let segs = segments(path);
    let mut out = Vec::new();
    for start in 0..segs.len() {
        for end in start..segs.len() {
            out.push(segs[start..=end].join("/"));
        }
    }
    out
}

fn ancestor_subpaths(path: &str) -> Vec<String> {
    let segs = segments(path);
    (0..segs.len()).map(|end| segs[..=end].join("/")).collect()
}

fn has_hidden_segment(path: &str) -> bool {
    segments(path)
        .iter()
        .any(|segment| segment.starts_with('.') && *segment != "." && *segment != "..")
}

/// Matches `text` against a glob supporting only the `*` wildcard
/// (matches any run of characters, including none).
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();
    let (mut pi, mut ti) = (0usize, 0usize);
    let mut star: Option<usize> = None;
    let mut match_idx = 0usize;

    while ti < t.len() {
        if pi < p.len() && p[pi] == t[ti] {
            pi += 1;
            ti += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some(pi);
            match_idx = ti;
            pi += 1;
        } else if let Some(star_idx) = star {
            pi = star_idx + 1;
            match_idx += 1;
            ti = match_idx;
        } else {
            return false;
        }
    }

    while pi < p.len() && p[pi] == '*' {
        pi += 1;
    }
    pi == p.len()
}
