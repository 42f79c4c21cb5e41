//! Test-name classification.
//!
//! The suite uses two declaration styles. Parametrized open tests are
//! declared as `name: (mode, flags, success, errno),` rows inside a macro
//! table; everything else is a plain `fn` with a `/// name: ...` doc line.
//! Which style a test uses is fully determined by its name.

/// Metadata shape of a test, decided from its short name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    /// `open_<group>_<case>`: tuple-table row.
    ParametrizedOpen,
    /// Everything else: doc line plus `fn` declaration.
    Described,
}

/// Classify a short test name.
///
/// ParametrizedOpen requires the `open_` prefix AND a further `_` in the
/// remainder: `open_creat_basic` qualifies, a bare `open_basic` does not.
pub fn classify(name: &str) -> TestKind {
    match name.strip_prefix("open_") {
        Some(rest) if rest.contains('_') => TestKind::ParametrizedOpen,
        _ => TestKind::Described,
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
