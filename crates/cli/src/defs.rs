//! Report-definition document parsing.
//!
//! The defs document is TOML with three top-level fields: `prelude` (text
//! emitted verbatim at the top of the report), `repo` (base URL used for
//! source deep links), and `topics` (table mapping topic name to its
//! description). Declared topic order is meaningful: per-topic sections
//! render in that order, while the summary table sorts lexicographically.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// One topic declaration, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDef {
    pub name: String,
    pub description: String,
}

/// Parsed report-definition document.
#[derive(Debug)]
pub struct ReportDefs {
    pub prelude: String,
    pub repo: String,
    pub topics: Vec<TopicDef>,
}

#[derive(Deserialize)]
struct RawDefs {
    prelude: String,
    repo: String,
    #[serde(default)]
    topics: toml::Table,
}

impl ReportDefs {
    /// Load and validate a defs document.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let raw: RawDefs = toml::from_str(&content).map_err(|e| Error::Defs {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        // toml's preserve_order feature keeps declaration order
        let mut topics = Vec::with_capacity(raw.topics.len());
        for (name, value) in raw.topics {
            let description = value.as_str().ok_or_else(|| Error::Defs {
                path: path.to_path_buf(),
                message: format!("topic {name:?} must map to a string description"),
            })?;
            topics.push(TopicDef {
                name,
                description: description.to_string(),
            });
        }

        Ok(Self {
            prelude: raw.prelude,
            repo: raw.repo,
            topics,
        })
    }

    /// Look up a topic definition by name.
    pub fn topic(&self, name: &str) -> Option<&TopicDef> {
        self.topics.iter().find(|t| t.name == name)
    }

    /// Deep link to one source line at a resolved revision.
    pub fn source_url(&self, revision: &str, file: &Path, line: u32) -> String {
        format!(
            "{}/tree/{}/{}#L{}",
            self.repo.trim_end_matches('/'),
            revision,
            file.display(),
            line
        )
    }
}

#[cfg(test)]
#[path = "defs_tests.rs"]
mod tests;
