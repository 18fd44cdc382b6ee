//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::engine::{MetricRecord, MetricsTable, SchemeSummary};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, report: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_detailed(&self, records: &[MetricRecord]) -> Result<String, ReportError> {
        self.render(&JsonDetailedReport {
            metadata: JsonReportMetadata::now(),
            records,
        })
    }

    fn generate_summary(&self, summaries: &[SchemeSummary]) -> Result<String, ReportError> {
        self.render(&JsonSummaryReport {
            metadata: JsonReportMetadata::now(),
            summaries,
        })
    }

    fn generate_combined(&self, table: &MetricsTable) -> Result<String, ReportError> {
        let failures = table
            .failures
            .iter()
            .map(|failure| JsonFailure {
                scheme: &failure.scheme,
                error: failure.error.to_string(),
            })
            .collect();
        self.render(&JsonCombinedReport {
            metadata: JsonReportMetadata::now(),
            records: &table.records,
            summaries: &table.summaries,
            failures,
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON report structures

#[derive(Serialize)]
struct JsonDetailedReport<'a> {
    metadata: JsonReportMetadata,
    records: &'a [MetricRecord],
}

#[derive(Serialize)]
struct JsonSummaryReport<'a> {
    metadata: JsonReportMetadata,
    summaries: &'a [SchemeSummary],
}

#[derive(Serialize)]
struct JsonCombinedReport<'a> {
    metadata: JsonReportMetadata,
    records: &'a [MetricRecord],
    summaries: &'a [SchemeSummary],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failures: Vec<JsonFailure<'a>>,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
}

impl JsonReportMetadata {
    fn now() -> Self {
        Self {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    scheme: &'a str,
    error: String,
}
