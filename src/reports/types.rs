//! Report type definitions.

use crate::engine::{MetricRecord, SchemeSummary};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: from the output file extension, else table on a TTY and
    /// CSV when piped
    #[default]
    Auto,
    /// CSV for spreadsheet import
    Csv,
    /// Structured JSON output
    Json,
    /// Markdown tables
    #[value(alias = "md")]
    Markdown,
    /// Aligned table for the terminal (colored)
    Table,
}

impl ReportFormat {
    /// File extension conventionally used for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv | Self::Auto => "csv",
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Table => "txt",
        }
    }

    /// Format implied by a file extension, if any.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "md" | "markdown" => Some(Self::Markdown),
            "txt" => Some(Self::Table),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
            Self::Table => write!(f, "table"),
        }
    }
}

/// The two tables every export produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSection {
    /// One row per (scheme, service, operation)
    Detailed,
    /// One row per scheme
    Summary,
}

impl ReportSection {
    /// Suffix appended to the output file stem.
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Detailed => "_detailed",
            Self::Summary => "_summary",
        }
    }

    /// Human-readable section title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Detailed => "Detailed Analysis",
            Self::Summary => "Scheme Summary",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Detailed, Self::Summary]
    }
}

// ============================================================================
// Column layout
// ============================================================================

/// Column headers of the detailed table.
pub const DETAILED_COLUMNS: [&str; 18] = [
    "Scheme",
    "Service",
    "NOO",
    "LCOM",
    "SGM",
    "MF",
    "M",
    "F",
    "Operation",
    "IPR",
    "OPR",
    "FP",
    "CP",
    "OT",
    "O",
    "DGS",
    "FGS",
    "SGM_Operation",
];

/// Column headers of the summary table.
pub const SUMMARY_COLUMNS: [&str; 6] = ["Scheme", "ALCOM", "ASGM", "NOO(max)", "Services", "Skipped"];

/// A table cell before format-specific rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Count(u64),
    Weight(i64),
    Score(f64),
}

impl Cell<'_> {
    /// Render with full float precision.
    #[must_use]
    pub fn exact(&self) -> String {
        match self {
            Self::Text(text) => (*text).to_string(),
            Self::Count(n) => n.to_string(),
            Self::Weight(w) => w.to_string(),
            Self::Score(x) => x.to_string(),
        }
    }

    /// Render with scores rounded for display.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Score(x) => format!("{x:.4}"),
            other => other.exact(),
        }
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        !matches!(self, Self::Text(_))
    }
}

fn count(n: usize) -> Cell<'static> {
    Cell::Count(n as u64)
}

/// Cells of one detailed row, in [`DETAILED_COLUMNS`] order.
#[must_use]
pub fn detailed_cells(r: &MetricRecord) -> [Cell<'_>; 18] {
    [
        Cell::Text(&r.scheme),
        Cell::Text(&r.service),
        count(r.noo),
        Cell::Score(r.lcom),
        Cell::Score(r.sgm),
        count(r.mf),
        count(r.m),
        count(r.f),
        Cell::Text(&r.operation),
        count(r.ipr),
        count(r.opr),
        count(r.fp),
        count(r.cp),
        Cell::Weight(r.ot),
        Cell::Weight(r.o),
        Cell::Score(r.dgs),
        Cell::Score(r.fgs),
        Cell::Score(r.sgm_operation),
    ]
}

/// Cells of one summary row, in [`SUMMARY_COLUMNS`] order.
#[must_use]
pub fn summary_cells(s: &SchemeSummary) -> [Cell<'_>; 6] {
    [
        Cell::Text(&s.scheme),
        Cell::Score(s.alcom),
        Cell::Score(s.asgm),
        count(s.max_noo),
        count(s.services),
        count(s.skipped_services),
    ]
}
