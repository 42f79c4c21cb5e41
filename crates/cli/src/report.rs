// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown report synthesis.
//!
//! Composes the two-level report: a verbatim prelude, a summary table with
//! per-topic pass counts, then one section per topic (in defs order) holding
//! the per-test result table and a detail block per test. Detail blocks
//! cross-link to the exact source line, the topic table, and the summary.

use std::collections::BTreeMap;
use std::io::Write;

use tracing::warn;

use crate::defs::ReportDefs;
use crate::matrix::{ResultMatrix, Status};
use crate::metadata::{MetadataIndex, TestMetadata};
use crate::topic;

/// The open_creat macro ORs O_CREAT into the flags, so the rendered options
/// for that topic carry it explicitly. Irregular on purpose.
const O_CREAT_TOPIC: &str = "open_creat";
const O_CREAT_PREFIX: &str = "O_CREAT | ";

/// Everything the synthesizer reads. The matrix and metadata are owned by
/// the caller and immutable here.
pub struct ReportInputs<'a> {
    pub matrix: &'a ResultMatrix,
    pub metadata: &'a MetadataIndex,
    pub defs: &'a ReportDefs,
    pub revision: &'a str,
}

/// Render the full Markdown document.
pub fn render(writer: &mut dyn Write, inputs: &ReportInputs) -> std::io::Result<()> {
    let groups = group_by_topic(inputs);

    writeln!(writer, "{}", inputs.defs.prelude.trim_end())?;
    writeln!(writer)?;

    write_summary(writer, inputs, &groups)?;

    for topic_def in &inputs.defs.topics {
        let Some(tests) = groups.get(topic_def.name.as_str()) else {
            continue;
        };
        write_topic_section(writer, inputs, &topic_def.name, &topic_def.description, tests)?;
    }

    Ok(())
}

/// Bucket matrix tests by derived topic, keeping only topics the defs
/// document declares. Undefined topics are diagnosed, not fatal.
fn group_by_topic<'a>(inputs: &ReportInputs<'a>) -> BTreeMap<&'a str, Vec<&'a str>> {
    let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for test in inputs.matrix.tests() {
        let topic = topic::topic_of(test);
        if inputs.defs.topic(topic).is_none() {
            warn!(topic, test, "test topic has no definition, dropping from report");
            continue;
        }
        groups.entry(topic).or_default().push(test);
    }

    groups
}

fn write_summary(
    writer: &mut dyn Write,
    inputs: &ReportInputs,
    groups: &BTreeMap<&str, Vec<&str>>,
) -> std::io::Result<()> {
    writeln!(writer, "## Summary")?;
    writeln!(writer)?;

    write!(writer, "| Topic | Tests |")?;
    for backend in inputs.matrix.backends() {
        write!(writer, " {backend} |")?;
    }
    writeln!(writer)?;

    write!(writer, "|-------|------:|")?;
    for _ in inputs.matrix.backends() {
        write!(writer, "---:|")?;
    }
    writeln!(writer)?;

    // BTreeMap iteration gives the lexicographic row order
    for (topic, tests) in groups {
        write!(writer, "| [{topic}](#{topic}) | {} |", tests.len())?;
        for backend in inputs.matrix.backends() {
            let passes = tests
                .iter()
                .filter(|t| inputs.matrix.status(t, backend) == Status::Pass)
                .count();
            write!(writer, " {passes} |")?;
        }
        writeln!(writer)?;
    }
    writeln!(writer)?;

    Ok(())
}

fn write_topic_section(
    writer: &mut dyn Write,
    inputs: &ReportInputs,
    topic: &str,
    description: &str,
    tests: &[&str],
) -> std::io::Result<()> {
    writeln!(writer, "## {topic}")?;
    writeln!(writer)?;
    writeln!(writer, "{description}")?;
    writeln!(writer)?;

    write!(writer, "| Test |")?;
    for backend in inputs.matrix.backends() {
        write!(writer, " {backend} |")?;
    }
    writeln!(writer)?;

    write!(writer, "|------|")?;
    for _ in inputs.matrix.backends() {
        write!(writer, ":---:|")?;
    }
    writeln!(writer)?;

    for test in tests {
        write!(writer, "| [{test}](#{test}) |")?;
        for backend in inputs.matrix.backends() {
            write!(writer, " {} |", inputs.matrix.status(test, backend).symbol())?;
        }
        writeln!(writer)?;
    }
    writeln!(writer)?;

    for test in tests {
        write_detail_block(writer, inputs, topic, test)?;
    }

    Ok(())
}

fn write_detail_block(
    writer: &mut dyn Write,
    inputs: &ReportInputs,
    topic: &str,
    test: &str,
) -> std::io::Result<()> {
    writeln!(writer, "### {test}")?;
    writeln!(writer)?;

    let Some(metadata) = inputs.metadata.get(test) else {
        // extract_all resolves every matrix test before rendering starts
        warn!(test, "no metadata resolved, skipping detail block");
        return Ok(());
    };

    match metadata {
        TestMetadata::Described(described) => {
            writeln!(writer, "{}", described.description)?;
        }
        TestMetadata::ParametrizedOpen(open) => {
            let options = if topic == O_CREAT_TOPIC {
                format!("{O_CREAT_PREFIX}{}", open.case.options)
            } else {
                open.case.options.clone()
            };
            let result = open.case.expected_error.as_deref().unwrap_or("success");

            writeln!(writer, "| Permissions | Options | Result |")?;
            writeln!(writer, "|-------------|---------|--------|")?;
            writeln!(
                writer,
                "| {} | {} | {} |",
                escape_cell(&open.case.permissions),
                escape_cell(&options),
                escape_cell(result)
            )?;
        }
    }
    writeln!(writer)?;

    let url = inputs
        .defs
        .source_url(inputs.revision, metadata.file(), metadata.line());
    writeln!(
        writer,
        "[source]({url}) \u{b7} [topic](#{topic}) \u{b7} [summary](#summary)"
    )?;
    writeln!(writer)?;

    Ok(())
}

/// Escape pipes so tokens like `O_CREAT | O_EXCL` survive a table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
