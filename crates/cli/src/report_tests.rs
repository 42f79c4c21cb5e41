// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::defs::{ReportDefs, TopicDef};
use crate::metadata;
use crate::test_utils::MemorySearch;

fn sample_defs() -> ReportDefs {
    ReportDefs {
        prelude: "# Conformance report\n\nGenerated from run logs.".to_string(),
        repo: "https://example.com/fs-suite".to_string(),
        topics: vec![
            TopicDef {
                name: "seek".to_string(),
                description: "Seeking within open files.".to_string(),
            },
            TopicDef {
                name: "open_creat".to_string(),
                description: "Opening with O_CREAT.".to_string(),
            },
            TopicDef {
                name: "open_ne".to_string(),
                description: "Opening paths that do not exist.".to_string(),
            },
        ],
    }
}

fn sample_matrix() -> ResultMatrix {
    ResultMatrix::default()
        .with_cell("seek_01", "ext4", Status::Pass)
        .with_cell("seek_01", "btrfs", Status::Pass)
        .with_cell("seek_02", "ext4", Status::Fail)
        .with_cell("open_ne_01", "ext4", Status::Pass)
        .with_cell("open_creat_01", "ext4", Status::Pass)
}

fn sample_search() -> MemorySearch {
    MemorySearch::new()
        .with_file(
            "file_other.rs",
            concat!(
                "/// seek_01: Simple move for reads.\n",
                "fn seek_01() {}\n",
                "/// seek_02: Error moving before 0.\n",
                "fn seek_02() {}\n",
            ),
        )
        .with_file(
            "file_open_close.rs",
            concat!(
                "open_ne_01: (libc::O_RDONLY, libc::O_NONBLOCK, false, libc::ENOENT),\n",
                "open_creat_01: (libc::S_IRWXU, libc::O_RDONLY, true, 0),\n",
            ),
        )
}

fn render_sample() -> String {
    let matrix = sample_matrix();
    let metadata = metadata::extract_all(&sample_search(), matrix.tests()).unwrap();
    let defs = sample_defs();
    let inputs = ReportInputs {
        matrix: &matrix,
        metadata: &metadata,
        defs: &defs,
        revision: "abc1234",
    };
    let mut out = Vec::new();
    render(&mut out, &inputs).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn prelude_comes_first_verbatim() {
    let out = render_sample();
    assert!(out.starts_with("# Conformance report\n\nGenerated from run logs.\n"));
}

#[test]
fn summary_rows_are_sorted_with_counts() {
    let out = render_sample();
    let summary_rows: Vec<_> = out
        .lines()
        .filter(|l| l.starts_with("| ["))
        .take(3)
        .collect();

    // lexicographic: open_creat, open_ne, seek; columns btrfs then ext4
    assert_eq!(
        summary_rows[0],
        "| [open_creat](#open_creat) | 1 | 0 | 1 |"
    );
    assert_eq!(summary_rows[1], "| [open_ne](#open_ne) | 1 | 0 | 1 |");
    assert_eq!(summary_rows[2], "| [seek](#seek) | 2 | 1 | 1 |");
}

#[test]
fn topic_sections_follow_declared_order() {
    let out = render_sample();
    let seek = out.find("## seek").unwrap();
    let creat = out.find("## open_creat").unwrap();
    let ne = out.find("## open_ne").unwrap();
    assert!(seek < creat);
    assert!(creat < ne);
}

#[test]
fn topic_section_carries_description_and_table() {
    let out = render_sample();
    assert!(out.contains("Seeking within open files."));
    assert!(out.contains("| [seek_01](#seek_01) | \u{2705} | \u{2705} |"));
    assert!(out.contains("| [seek_02](#seek_02) | \u{26a0} | \u{274c} |"));
}

#[test]
fn described_detail_renders_description() {
    let out = render_sample();
    assert!(out.contains("### seek_01\n\nSimple move for reads."));
}

#[test]
fn open_detail_renders_argument_table() {
    let out = render_sample();
    assert!(out.contains("| Permissions | Options | Result |"));
    assert!(out.contains("| O_RDONLY | O_NONBLOCK | ENOENT |"));
}

#[test]
fn open_creat_topic_prefixes_options() {
    let out = render_sample();
    assert!(out.contains("| S_IRWXU | O_CREAT \\| O_RDONLY | success |"));
}

#[test]
fn detail_blocks_link_source_topic_summary() {
    let out = render_sample();
    assert!(out.contains(
        "[source](https://example.com/fs-suite/tree/abc1234/file_other.rs#L2) \u{b7} \
         [topic](#seek) \u{b7} [summary](#summary)"
    ));
}

#[test]
fn undefined_topic_is_dropped_from_output() {
    let matrix = sample_matrix().with_cell("mystery_01", "ext4", Status::Pass);
    let search = sample_search().with_file(
        "extra.rs",
        concat!("/// mystery_01: Not in any defined topic.\n", "fn mystery_01() {}\n"),
    );
    let metadata = metadata::extract_all(&search, matrix.tests()).unwrap();
    let defs = sample_defs();
    let inputs = ReportInputs {
        matrix: &matrix,
        metadata: &metadata,
        defs: &defs,
        revision: "abc1234",
    };
    let mut out = Vec::new();
    render(&mut out, &inputs).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(!out.contains("mystery"));
}

#[test]
fn report_cells_agree_with_csv() {
    let matrix = sample_matrix();
    let out = render_sample();

    let mut csv = Vec::new();
    crate::csv::write_csv(&mut csv, &matrix).unwrap();
    let csv = String::from_utf8(csv).unwrap();

    for test in matrix.tests() {
        let csv_row = csv
            .lines()
            .find(|l| l.starts_with(&format!("{test},")))
            .unwrap();
        let csv_cells: Vec<_> = csv_row.split(',').skip(1).collect();

        let report_row = out
            .lines()
            .find(|l| l.starts_with(&format!("| [{test}](#{test}) |")))
            .unwrap();
        let report_cells: Vec<_> = report_row
            .split('|')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .skip(1)
            .collect();

        assert_eq!(csv_cells, report_cells, "cell mismatch for {test}");
    }
}
