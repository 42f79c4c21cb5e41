pub mod classify;
pub mod cli;
pub mod csv;
pub mod defs;
pub mod error;
pub mod events;
pub mod git;
pub mod matrix;
pub mod metadata;
pub mod report;
pub mod search;
pub mod topic;
pub mod tuple;

pub use classify::TestKind;
pub use cli::{Cli, Command, CsvArgs, ReportArgs};
pub use defs::ReportDefs;
pub use error::{Error, ExitCode, Result};
pub use matrix::{ResultMatrix, Status};
pub use metadata::{MetadataIndex, TestMetadata};
pub use search::{LineHit, SearchPattern, SourceSearch, TreeSearch};

#[cfg(test)]
pub mod test_utils;
