//! Markdown report generator.

use super::escape::escape_markdown_table;
use super::types::{Cell, DETAILED_COLUMNS, SUMMARY_COLUMNS, detailed_cells, summary_cells};
use super::{ReportError, ReportFormat, ReportGenerator, ReportSection};
use crate::engine::{MetricRecord, SchemeSummary};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_table<'a, R>(
    out: &mut String,
    section: ReportSection,
    columns: &[&str],
    rows: impl Iterator<Item = R>,
) -> Result<(), ReportError>
where
    R: IntoIterator<Item = Cell<'a>>,
{
    writeln!(out, "## {}\n", section.title())?;
    writeln!(out, "| {} |", columns.join(" | "))?;
    let rule: Vec<&str> = columns.iter().map(|_| "---").collect();
    writeln!(out, "| {} |", rule.join(" | "))?;

    for row in rows {
        let cells: Vec<String> = row
            .into_iter()
            .map(|cell| match cell {
                Cell::Text(text) => escape_markdown_table(text),
                other => other.display(),
            })
            .collect();
        writeln!(out, "| {} |", cells.join(" | "))?;
    }
    Ok(())
}

impl ReportGenerator for MarkdownReporter {
    fn generate_detailed(&self, records: &[MetricRecord]) -> Result<String, ReportError> {
        let mut out = String::new();
        write_table(
            &mut out,
            ReportSection::Detailed,
            &DETAILED_COLUMNS,
            records.iter().map(detailed_cells),
        )?;
        Ok(out)
    }

    fn generate_summary(&self, summaries: &[SchemeSummary]) -> Result<String, ReportError> {
        let mut out = String::new();
        write_table(
            &mut out,
            ReportSection::Summary,
            &SUMMARY_COLUMNS,
            summaries.iter().map(summary_cells),
        )?;
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support;

    #[test]
    fn test_summary_markdown() {
        let md = MarkdownReporter::new()
            .generate_summary(&[test_support::summary("split|v2")])
            .unwrap();
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines[0], "## Scheme Summary");
        assert_eq!(lines[2], "| Scheme | ALCOM | ASGM | NOO(max) | Services | Skipped |");
        assert_eq!(lines[3], "| --- | --- | --- | --- | --- | --- |");
        assert_eq!(lines[4], "| split\\|v2 | 0.0000 | 1.0000 | 2 | 1 | 0 |");
    }

    #[test]
    fn test_detailed_markdown_rows() {
        let md = MarkdownReporter::new()
            .generate_combined(&test_support::table())
            .unwrap();
        assert!(md.contains("## Detailed Analysis"));
        assert!(md.contains("| monolith | OrderService | 2 | 0.0000 | 1.0000 |"));
        assert_eq!(md.matches("CreateOrder").count(), 1);
    }
}
