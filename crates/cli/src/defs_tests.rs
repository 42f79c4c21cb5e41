#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;

use tempfile::TempDir;

use super::*;

fn load_str(content: &str) -> Result<ReportDefs> {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("report.toml");
    std::fs::write(&path, content).unwrap();
    ReportDefs::load(&path)
}

const SAMPLE: &str = r##"
prelude = "# Conformance report\n\nGenerated from run logs."
repo = "https://example.com/fs-suite"

[topics]
seek = "Seeking within open files."
read = "Sequential reads."
open_ne = "Opening paths that do not exist."
"##;

#[test]
fn parses_all_fields() {
    let defs = load_str(SAMPLE).unwrap();
    assert!(defs.prelude.starts_with("# Conformance report"));
    assert_eq!(defs.repo, "https://example.com/fs-suite");
    assert_eq!(defs.topics.len(), 3);
}

#[test]
fn preserves_declared_topic_order() {
    let defs = load_str(SAMPLE).unwrap();
    let names: Vec<_> = defs.topics.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["seek", "read", "open_ne"]);
}

#[test]
fn topic_lookup_by_name() {
    let defs = load_str(SAMPLE).unwrap();
    assert_eq!(
        defs.topic("read").map(|t| t.description.as_str()),
        Some("Sequential reads.")
    );
    assert!(defs.topic("write").is_none());
}

#[test]
fn source_url_joins_repo_revision_file_line() {
    let defs = load_str(SAMPLE).unwrap();
    assert_eq!(
        defs.source_url("abc1234", Path::new("file_read.rs"), 42),
        "https://example.com/fs-suite/tree/abc1234/file_read.rs#L42"
    );
}

#[test]
fn source_url_tolerates_trailing_slash() {
    let defs = load_str(
        r#"
prelude = "p"
repo = "https://example.com/fs-suite/"
"#,
    )
    .unwrap();
    assert_eq!(
        defs.source_url("abc1234", Path::new("f.rs"), 1),
        "https://example.com/fs-suite/tree/abc1234/f.rs#L1"
    );
}

#[test]
fn non_string_topic_description_is_rejected() {
    let err = load_str(
        r#"
prelude = "p"
repo = "r"

[topics]
seek = 3
"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Defs { .. }));
}

#[test]
fn missing_required_field_is_rejected() {
    assert!(load_str(r#"repo = "r""#).is_err());
}

#[test]
fn missing_file_is_io_error() {
    let err = ReportDefs::load(Path::new("/nonexistent/report.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
