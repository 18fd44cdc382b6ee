//! CSV report generator.
//!
//! Generates comma-separated tables suitable for spreadsheet import and data
//! analysis pipelines. Text cells are always quoted; numbers are written with
//! full precision.

use super::escape::escape_csv;
use super::types::{Cell, DETAILED_COLUMNS, SUMMARY_COLUMNS, detailed_cells, summary_cells};
use super::{ReportError, ReportFormat, ReportGenerator, ReportSection};
use crate::engine::{MetricRecord, MetricsTable, SchemeSummary};

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn csv_cell(cell: &Cell<'_>) -> String {
    match cell {
        Cell::Text(text) => format!("\"{}\"", escape_csv(text)),
        other => other.exact(),
    }
}

fn push_row<'a>(content: &mut String, cells: impl IntoIterator<Item = Cell<'a>>) {
    let row: Vec<String> = cells.into_iter().map(|cell| csv_cell(&cell)).collect();
    content.push_str(&row.join(","));
    content.push('\n');
}

impl ReportGenerator for CsvReporter {
    fn generate_detailed(&self, records: &[MetricRecord]) -> Result<String, ReportError> {
        let mut content = String::new();
        content.push_str(&DETAILED_COLUMNS.join(","));
        content.push('\n');
        for record in records {
            push_row(&mut content, detailed_cells(record));
        }
        Ok(content)
    }

    fn generate_summary(&self, summaries: &[SchemeSummary]) -> Result<String, ReportError> {
        let mut content = String::new();
        content.push_str(&SUMMARY_COLUMNS.join(","));
        content.push('\n');
        for summary in summaries {
            push_row(&mut content, summary_cells(summary));
        }
        Ok(content)
    }

    fn generate_combined(&self, table: &MetricsTable) -> Result<String, ReportError> {
        let mut content = String::new();
        for (i, section) in ReportSection::all().into_iter().enumerate() {
            if i > 0 {
                content.push('\n');
            }
            content.push_str(&format!("# {}\n", section.title()));
            content.push_str(&self.generate_section(section, table)?);
        }
        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}
