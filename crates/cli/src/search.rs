//! Source-tree line search.
//!
//! Metadata extraction locates test declarations by searching the suite's
//! source tree for matching lines. The collaborator sits behind the narrow
//! [`SourceSearch`] trait so tests can substitute an in-memory index for the
//! filesystem walk.

use std::path::{Path, PathBuf};

use memchr::memmem;
use regex::Regex;

use crate::error::{Error, Result};

/// One matching line: file relative to the search root, 1-based line
/// number, and the full line text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineHit {
    pub file: PathBuf,
    pub line: u32,
    pub text: String,
}

/// A search pattern, matched per line.
#[derive(Debug, Clone)]
pub enum SearchPattern {
    /// Plain substring match.
    Literal(String),
    /// Unanchored regex match.
    Regex(String),
}

/// Narrow search interface: pattern in, sorted line hits out.
pub trait SourceSearch {
    fn matching_lines(&self, pattern: &SearchPattern) -> Result<Vec<LineHit>>;
}

/// Compiled per-line matcher. Literal patterns use memmem, everything else
/// goes through the regex crate.
pub(crate) enum LineMatcher {
    Literal(String),
    Regex(Regex),
}

impl LineMatcher {
    pub(crate) fn compile(pattern: &SearchPattern) -> Result<Self> {
        match pattern {
            SearchPattern::Literal(lit) => Ok(LineMatcher::Literal(lit.clone())),
            SearchPattern::Regex(re) => {
                // Patterns are built from test names, not user input
                let regex = Regex::new(re)
                    .map_err(|e| Error::Internal(format!("bad search pattern {re:?}: {e}")))?;
                Ok(LineMatcher::Regex(regex))
            }
        }
    }

    pub(crate) fn is_match(&self, line: &str) -> bool {
        match self {
            LineMatcher::Literal(lit) => memmem::find(line.as_bytes(), lit.as_bytes()).is_some(),
            LineMatcher::Regex(re) => re.is_match(line),
        }
    }
}

/// Scan one file's content, appending hits. Shared by the tree search and
/// the in-memory test index.
pub(crate) fn scan_content(
    file: &Path,
    content: &str,
    matcher: &LineMatcher,
    hits: &mut Vec<LineHit>,
) {
    for (idx, line) in content.lines().enumerate() {
        if matcher.is_match(line) {
            hits.push(LineHit {
                file: file.to_path_buf(),
                line: idx as u32 + 1,
                text: line.to_string(),
            });
        }
    }
}

/// Filesystem search over a source root.
///
/// Walks with the ignore crate (gitignore-aware, hidden files skipped) and
/// scans UTF-8 files line by line; binary and non-UTF-8 files are skipped.
pub struct TreeSearch {
    root: PathBuf,
}

impl TreeSearch {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceSearch for TreeSearch {
    fn matching_lines(&self, pattern: &SearchPattern) -> Result<Vec<LineHit>> {
        let matcher = LineMatcher::compile(pattern)?;
        let mut hits = Vec::new();

        for entry in ignore::WalkBuilder::new(&self.root).build() {
            let entry = entry.map_err(|e| Error::Internal(format!("walk error: {e}")))?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.path();
            let content = match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => continue,
                Err(source) => {
                    return Err(Error::Io {
                        path: path.to_path_buf(),
                        source,
                    });
                }
            };

            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            scan_content(relative, &content, &matcher, &mut hits);
        }

        // Walk order is not deterministic; hit order must be.
        hits.sort_by(|a, b| (&a.file, a.line).cmp(&(&b.file, b.line)));
        Ok(hits)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
