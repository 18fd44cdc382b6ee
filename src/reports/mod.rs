//! Report generation for metrics tables.
//!
//! Every export produces two tables, detailed and summary:
//! - CSV: spreadsheet import
//! - JSON: structured data for programmatic integration
//! - Markdown: human-readable documentation
//! - Table: aligned terminal output
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! Names read from input files should be escaped before embedding in CSV
//! or Markdown reports.

mod csv;
pub mod escape;
mod json;
mod markdown;
mod table;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use table::TableReporter;
pub use types::{
    Cell, DETAILED_COLUMNS, ReportFormat, ReportSection, SUMMARY_COLUMNS, detailed_cells,
    summary_cells,
};

use crate::engine::{MetricRecord, MetricsTable, SchemeSummary};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the detailed table
    fn generate_detailed(&self, records: &[MetricRecord]) -> Result<String, ReportError>;

    /// Render the scheme summary table
    fn generate_summary(&self, summaries: &[SchemeSummary]) -> Result<String, ReportError>;

    /// Render one section of a metrics table
    fn generate_section(
        &self,
        section: ReportSection,
        table: &MetricsTable,
    ) -> Result<String, ReportError> {
        match section {
            ReportSection::Detailed => self.generate_detailed(&table.records),
            ReportSection::Summary => self.generate_summary(&table.summaries),
        }
    }

    /// Render both sections into a single document, for stdout
    fn generate_combined(&self, table: &MetricsTable) -> Result<String, ReportError> {
        let detailed = self.generate_detailed(&table.records)?;
        let summary = self.generate_summary(&table.summaries)?;
        Ok(format!("{detailed}\n{summary}"))
    }

    /// Write both sections to a writer
    fn write_combined(
        &self,
        table: &MetricsTable,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_combined(table)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
        ReportFormat::Csv => Box::new(CsvReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::engine::{MetricRecord, MetricsTable, SchemeSummary};

    pub fn record(scheme: &str, service: &str, operation: &str) -> MetricRecord {
        MetricRecord {
            scheme: scheme.to_string(),
            service: service.to_string(),
            noo: 2,
            lcom: 0.0,
            sgm: 1.0,
            mf: 4,
            m: 2,
            f: 2,
            operation: operation.to_string(),
            ipr: 0,
            opr: 2,
            fp: 2,
            cp: 2,
            ot: 4,
            o: 5,
            dgs: 1.0,
            fgs: 0.8,
            sgm_operation: 0.8,
        }
    }

    pub fn summary(scheme: &str) -> SchemeSummary {
        SchemeSummary {
            scheme: scheme.to_string(),
            alcom: 0.0,
            asgm: 1.0,
            max_noo: 2,
            services: 1,
            skipped_services: 0,
        }
    }

    pub fn table() -> MetricsTable {
        MetricsTable {
            records: vec![
                record("monolith", "OrderService", "CreateOrder"),
                record("monolith", "OrderService", "GetOrder"),
            ],
            summaries: vec![summary("monolith")],
            failures: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        for format in [
            ReportFormat::Csv,
            ReportFormat::Json,
            ReportFormat::Markdown,
            ReportFormat::Table,
        ] {
            assert_eq!(create_reporter(format).format(), format);
        }
        assert_eq!(
            create_reporter_with_options(ReportFormat::Auto, false).format(),
            ReportFormat::Table
        );
    }

    #[test]
    fn test_combined_contains_both_sections() {
        let table = test_support::table();
        let mut out = Vec::new();
        CsvReporter::new().write_combined(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("SGM_Operation"));
        assert!(text.contains("NOO(max)"));
    }
}
