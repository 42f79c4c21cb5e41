//! Per-test metadata extraction from the suite's source tree.
//!
//! Dispatches on [`classify`]: parametrized open tests are located by their
//! literal `<name>:` table row, every other test by its `/// <name>: ...`
//! doc line plus `fn <name>` declaration. One search per test name; results
//! are cached in a [`MetadataIndex`] for the duration of one report.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::classify::{self, TestKind};
use crate::error::{Error, Result};
use crate::search::{LineHit, SearchPattern, SourceSearch};
use crate::tuple::{self, OpenCase};

/// Metadata of a parametrized open test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenMetadata {
    pub file: PathBuf,
    pub line: u32,
    pub case: OpenCase,
}

/// Metadata of a described test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribedMetadata {
    pub file: PathBuf,
    pub line: u32,
    pub description: String,
}

/// Shape-specific metadata for one test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestMetadata {
    ParametrizedOpen(OpenMetadata),
    Described(DescribedMetadata),
}

impl TestMetadata {
    pub fn file(&self) -> &Path {
        match self {
            TestMetadata::ParametrizedOpen(m) => &m.file,
            TestMetadata::Described(m) => &m.file,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            TestMetadata::ParametrizedOpen(m) => m.line,
            TestMetadata::Described(m) => m.line,
        }
    }
}

/// Resolved metadata keyed by short test name; one record per name.
#[derive(Debug, Default)]
pub struct MetadataIndex {
    entries: BTreeMap<String, TestMetadata>,
}

impl MetadataIndex {
    pub fn get(&self, name: &str) -> Option<&TestMetadata> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve metadata for every test name.
pub fn extract_all<'a>(
    search: &dyn SourceSearch,
    names: impl Iterator<Item = &'a str>,
) -> Result<MetadataIndex> {
    let mut index = MetadataIndex::default();
    for name in names {
        let metadata = extract_one(search, name)?;
        index.entries.insert(name.to_string(), metadata);
    }
    Ok(index)
}

fn extract_one(search: &dyn SourceSearch, name: &str) -> Result<TestMetadata> {
    match classify::classify(name) {
        TestKind::ParametrizedOpen => extract_open(search, name),
        TestKind::Described => extract_described(search, name),
    }
}

fn ambiguity(name: &str, expected: usize, hits: &[LineHit]) -> Error {
    Error::MetadataAmbiguity {
        name: name.to_string(),
        expected,
        found: hits
            .iter()
            .map(|h| format!("{}:{}:{}", h.file.display(), h.line, h.text))
            .collect(),
    }
}

fn extract_open(search: &dyn SourceSearch, name: &str) -> Result<TestMetadata> {
    debug!(test = name, "loading open test metadata");

    let pattern = SearchPattern::Literal(format!("{name}:"));
    let hits = search.matching_lines(&pattern)?;
    let [hit] = hits.as_slice() else {
        return Err(ambiguity(name, 1, &hits));
    };

    let case = tuple::parse_open_case(name, &hit.text)?;
    Ok(TestMetadata::ParametrizedOpen(OpenMetadata {
        file: hit.file.clone(),
        line: hit.line,
        case,
    }))
}

fn extract_described(search: &dyn SourceSearch, name: &str) -> Result<TestMetadata> {
    debug!(test = name, "loading described test metadata");

    let pattern = SearchPattern::Regex(format!("((/// )|(fn )){}", regex::escape(name)));
    let mut hits = search.matching_lines(&pattern)?;
    hits.dedup();
    if hits.len() != 2 {
        return Err(ambiguity(name, 2, &hits));
    }

    let shape_err = |message: String| Error::MetadataShape {
        name: name.to_string(),
        message,
    };

    let doc = hits
        .iter()
        .find(|h| h.text.contains("/// "))
        .ok_or_else(|| shape_err("no doc line among matches".to_string()))?;
    let decl = hits
        .iter()
        .find(|h| h.text.contains("fn "))
        .ok_or_else(|| shape_err("no fn declaration among matches".to_string()))?;

    if doc.file != decl.file {
        return Err(shape_err(format!(
            "doc line in {} but declaration in {}",
            doc.file.display(),
            decl.file.display()
        )));
    }
    if decl.file.as_os_str().is_empty() {
        return Err(shape_err("empty file name".to_string()));
    }
    if decl.line == 0 {
        return Err(shape_err("missing declaration line number".to_string()));
    }

    // Everything after the first colon-delimited marker is the description.
    let description = doc
        .text
        .split_once(':')
        .map(|(_, rest)| rest.trim())
        .unwrap_or("");
    if description.is_empty() {
        return Err(shape_err("empty description".to_string()));
    }

    Ok(TestMetadata::Described(DescribedMetadata {
        file: decl.file.clone(),
        line: decl.line,
        description: description.to_string(),
    }))
}

#[cfg(test)]
#[path = "metadata_tests.rs"]
mod tests;
