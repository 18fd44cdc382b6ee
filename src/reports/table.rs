//! Table report generator for terminal output.
//!
//! Column widths adapt to the content; text columns are capped and truncated.

use super::escape::{sanitize_terminal, truncate};
use super::types::{Cell, DETAILED_COLUMNS, SUMMARY_COLUMNS, detailed_cells, summary_cells};
use super::{ReportError, ReportFormat, ReportGenerator, ReportSection};
use crate::engine::{MetricRecord, SchemeSummary};

/// Widest a text column may grow before values are truncated.
const MAX_TEXT_WIDTH: usize = 32;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Table reporter for terminal output
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn render<'a, R>(
        &self,
        section: ReportSection,
        columns: &[&str],
        rows: impl Iterator<Item = R>,
    ) -> String
    where
        R: IntoIterator<Item = Cell<'a>>,
    {
        // (text, right-aligned) per cell
        let body: Vec<Vec<(String, bool)>> = rows
            .map(|row| {
                row.into_iter()
                    .map(|cell| match cell {
                        Cell::Text(text) => {
                            (truncate(&sanitize_terminal(text), MAX_TEXT_WIDTH), false)
                        }
                        other => (other.display(), true),
                    })
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
        for row in &body {
            for (width, (text, _)) in widths.iter_mut().zip(row) {
                *width = (*width).max(text.chars().count());
            }
        }

        let mut lines = Vec::with_capacity(body.len() + 3);
        lines.push(self.color(section.title(), "bold"));

        let header: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(name, &width)| self.color(&format!("{name:<width$}"), "cyan"))
            .collect();
        lines.push(header.join("  "));

        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        lines.push(self.color(&"─".repeat(total), "dim"));

        for row in body {
            let cells: Vec<String> = row
                .into_iter()
                .zip(&widths)
                .map(|((text, numeric), &width)| {
                    if numeric {
                        format!("{text:>width$}")
                    } else {
                        format!("{text:<width$}")
                    }
                })
                .collect();
            lines.push(cells.join("  ").trim_end().to_string());
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate_detailed(&self, records: &[MetricRecord]) -> Result<String, ReportError> {
        Ok(self.render(
            ReportSection::Detailed,
            &DETAILED_COLUMNS,
            records.iter().map(detailed_cells),
        ))
    }

    fn generate_summary(&self, summaries: &[SchemeSummary]) -> Result<String, ReportError> {
        Ok(self.render(
            ReportSection::Summary,
            &SUMMARY_COLUMNS,
            summaries.iter().map(summary_cells),
        ))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}
