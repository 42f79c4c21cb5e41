//! Result aggregation across run logs.
//!
//! Folds one event stream per backend into a test x backend status matrix.
//! Backend identity is the log file's stem; a log contributing no test
//! events contributes no backend column.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::events::{self, Phase, TestEvent};

/// Outcome of one (test, backend) cell.
///
/// `Skip` is never stored: it is the rendered default for a cell no log ever
/// reported. Both output modes share these symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
    Skip,
}

impl Status {
    /// Fixed display symbol, shared by CSV and Markdown output.
    pub fn symbol(self) -> &'static str {
        match self {
            Status::Pass => "\u{2705}",
            Status::Fail => "\u{274c}",
            Status::Skip => "\u{26a0}",
        }
    }
}

/// Immutable test x backend status matrix.
///
/// Built once by [`gather`]; iteration over tests and backends is sorted.
#[derive(Debug, Default)]
pub struct ResultMatrix {
    cells: BTreeMap<String, BTreeMap<String, Status>>,
    backends: BTreeSet<String>,
}

impl ResultMatrix {
    /// Short test names, lexicographically sorted.
    pub fn tests(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Backend names, lexicographically sorted.
    pub fn backends(&self) -> impl Iterator<Item = &str> {
        self.backends.iter().map(String::as_str)
    }

    /// Cell status; `Skip` when the pair was never observed.
    pub fn status(&self, test: &str, backend: &str) -> Status {
        self.cells
            .get(test)
            .and_then(|row| row.get(backend))
            .copied()
            .unwrap_or(Status::Skip)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Incremental matrix builder with duplicate-name detection.
#[derive(Debug, Default)]
struct Builder {
    matrix: ResultMatrix,
    // short name -> qualified name that introduced it
    qualified: HashMap<String, String>,
}

impl Builder {
    fn record(&mut self, backend: &str, event: &TestEvent) -> Result<()> {
        let short = event.short_name().to_string();

        match self.qualified.get(&short) {
            Some(existing) if existing != &event.name => {
                return Err(Error::DuplicateTest {
                    name: short,
                    existing: existing.clone(),
                    conflicting: event.name.clone(),
                });
            }
            Some(_) => {}
            None => {
                self.qualified.insert(short.clone(), event.name.clone());
            }
        }

        let status = match event.phase {
            Phase::Ok => Status::Pass,
            Phase::Failed => Status::Fail,
            Phase::Ignored => {
                return Err(Error::TestIgnored {
                    name: short,
                    backend: backend.to_string(),
                });
            }
            // parse_log drops these
            Phase::Started => return Ok(()),
        };

        self.matrix.backends.insert(backend.to_string());
        // last write wins for repeated (test, backend) pairs
        self.matrix
            .cells
            .entry(short)
            .or_default()
            .insert(backend.to_string(), status);
        Ok(())
    }
}

/// Fold every run log in `dir` into a matrix.
///
/// Each non-directory entry is one backend's log, named by its file stem.
pub fn gather(dir: &Path) -> Result<ResultMatrix> {
    let mut builder = Builder::default();

    let entries = fs::read_dir(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }

        let backend = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };

        let content = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

        let parsed = events::parse_log(&path, &content)?;
        debug!(backend = %backend, events = parsed.len(), "parsed run log");
        for event in &parsed {
            builder.record(&backend, event)?;
        }
    }

    Ok(builder.matrix)
}

#[cfg(test)]
impl ResultMatrix {
    /// Build a matrix directly, bypassing log parsing.
    pub(crate) fn with_cell(mut self, test: &str, backend: &str, status: Status) -> Self {
        self.backends.insert(backend.to_string());
        self.cells
            .entry(test.to_string())
            .or_default()
            .insert(backend.to_string(), status);
        self
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
