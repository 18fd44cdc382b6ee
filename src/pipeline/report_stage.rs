//! Report output stage.
//!
//! Renders a metrics table with the configured reporter and writes it either
//! as two files (detailed and summary) or as one combined stream on stdout.

use crate::config::OutputConfig;
use crate::engine::MetricsTable;
use crate::reports::{ReportFormat, ReportSection, create_reporter_with_options};
use anyhow::Result;
use std::path::PathBuf;

use super::{
    OutputTarget, PipelineError, auto_detect_format, section_path, should_use_color, write_file,
    write_stdout,
};

/// Where a report went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    Stdout,
    Files {
        detailed: PathBuf,
        summary: PathBuf,
    },
}

/// Export a metrics table to the configured destination.
///
/// Returns `None` without writing anything when either table is empty.
pub fn output_report(
    output: &OutputConfig,
    table: &MetricsTable,
) -> Result<Option<ReportDestination>> {
    if table.is_empty() {
        tracing::warn!("No metrics calculated; nothing to export");
        return Ok(None);
    }

    let target = OutputTarget::from_option(output.file.clone());
    let format = auto_detect_format(output.format, &target);
    let use_color = should_use_color(output.no_color) && target.is_terminal();
    let reporter = create_reporter_with_options(format, use_color);
    tracing::debug!("Exporting metrics as {format}");

    let report_failed = |source| PipelineError::ReportFailed { source };

    match target {
        OutputTarget::Stdout => {
            let report = reporter.generate_combined(table).map_err(report_failed)?;
            write_stdout(&report);
            Ok(Some(ReportDestination::Stdout))
        }
        OutputTarget::File(base) => {
            let detailed = section_path(&base, ReportSection::Detailed, format);
            let summary = section_path(&base, ReportSection::Summary, format);
            for (section, path) in [
                (ReportSection::Detailed, &detailed),
                (ReportSection::Summary, &summary),
            ] {
                let report = reporter
                    .generate_section(section, table)
                    .map_err(report_failed)?;
                write_file(&report, path)?;
            }
            Ok(Some(ReportDestination::Files { detailed, summary }))
        }
    }
}

/// Format that [`output_report`] would use for this output config.
#[must_use]
pub fn effective_format(output: &OutputConfig) -> ReportFormat {
    auto_detect_format(output.format, &OutputTarget::from_option(output.file.clone()))
}
