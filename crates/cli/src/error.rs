use std::path::PathBuf;

/// fsmatrix error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A run log line is not a valid event record
    #[error("malformed log line: {}:{line}: {source}", .path.display())]
    Log {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A test reported the `ignored` phase (broken suite, not a skip)
    #[error("test ignored: {name} ({backend})")]
    TestIgnored { name: String, backend: String },

    /// The same short test name reached through two qualified names
    #[error("duplicate test name: {name} ({existing} vs {conflicting})")]
    DuplicateTest {
        name: String,
        existing: String,
        conflicting: String,
    },

    /// Source search returned an unexpected number of matching lines
    #[error(
        "metadata lookup for {name}: expected {expected} matching line(s), found {}",
        .found.len()
    )]
    MetadataAmbiguity {
        name: String,
        expected: usize,
        found: Vec<String>,
    },

    /// Declaration line does not have the expected shape
    #[error("metadata shape for {name}: {message}")]
    MetadataShape { name: String, message: String },

    /// Report-definition document not found or invalid
    #[error("defs error: {}: {message}", .path.display())]
    Defs { path: PathBuf, message: String },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using fsmatrix Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Report or CSV written in full
    Success = 0,
    /// Wrong arguments
    UsageError = 1,
    /// Metadata lookup yielded an unexpected match count
    MetadataError = 2,
    /// A run log or defs document is defective
    InputError = 3,
    /// Internal error
    InternalError = 4,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::MetadataAmbiguity { .. } => ExitCode::MetadataError,
            Error::Log { .. }
            | Error::TestIgnored { .. }
            | Error::DuplicateTest { .. }
            | Error::MetadataShape { .. }
            | Error::Defs { .. } => ExitCode::InputError,
            Error::Io { .. } | Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
