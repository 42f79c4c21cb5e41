//! Run-log event parsing.
//!
//! A run log is line-delimited JSON, one record per line, as emitted by the
//! test harness. Only records with `"type": "test"` carry outcomes; every
//! other record kind is skipped without inspection.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Lifecycle phase of a test record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Started,
    Ok,
    Ignored,
    Failed,
}

/// One outcome-bearing test record from a run log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestEvent {
    pub phase: Phase,
    /// Fully qualified `a::b::c` test path as reported by the harness.
    pub name: String,
}

impl TestEvent {
    /// The short test name: the segment after the final `::`.
    pub fn short_name(&self) -> &str {
        self.name.rsplit("::").next().unwrap_or(&self.name)
    }
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Record {
    #[serde(rename = "test")]
    Test { event: Phase, name: String },
    #[serde(other)]
    Other,
}

/// Parse one run log into its outcome events.
///
/// `started` records carry no outcome and are dropped here. A line that is
/// not a valid record is fatal; `path` is only used for the diagnostic.
pub fn parse_log(path: &Path, content: &str) -> Result<Vec<TestEvent>> {
    let mut events = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record: Record = serde_json::from_str(line).map_err(|source| Error::Log {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;

        match record {
            Record::Test { event, name } => {
                if event == Phase::Started {
                    continue;
                }
                events.push(TestEvent { phase: event, name });
            }
            Record::Other => {}
        }
    }

    Ok(events)
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
