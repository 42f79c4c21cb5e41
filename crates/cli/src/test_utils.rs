//! Shared test helpers.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::PathBuf;

use crate::error::Result;
use crate::search::{LineHit, SearchPattern, SourceSearch, scan_content};

/// In-memory stand-in for [`crate::search::TreeSearch`]: a fixed set of
/// (path, content) files searched without touching the filesystem.
#[derive(Default)]
pub struct MemorySearch {
    files: Vec<(PathBuf, String)>,
}

impl MemorySearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.push((PathBuf::from(path), content.to_string()));
        self
    }
}

impl SourceSearch for MemorySearch {
    fn matching_lines(&self, pattern: &SearchPattern) -> Result<Vec<LineHit>> {
        let matcher = crate::search::LineMatcher::compile(pattern)?;
        let mut hits = Vec::new();
        for (file, content) in &self.files {
            scan_content(file, content, &matcher, &mut hits);
        }
        hits.sort_by(|a, b| (&a.file, a.line).cmp(&(&b.file, b.line)));
        Ok(hits)
    }
}
