//! Output handling for metrics reports.
//!
//! Provides utilities for auto-detecting output format, deriving the two
//! report file paths and writing reports.

use crate::reports::{ReportFormat, ReportSection};
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Target for output - either stdout or a base file path
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write both sections to stdout
    Stdout,
    /// Write `<stem>_detailed<ext>` and `<stem>_summary<ext>` next to this path
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => OutputTarget::File(p),
            None => OutputTarget::Stdout,
        }
    }

    /// Check if output is to a terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, OutputTarget::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Resolve `ReportFormat::Auto` against the output target.
///
/// File targets use the format implied by their extension, falling back to
/// CSV. Stdout gets a table on a terminal and CSV when piped.
pub fn auto_detect_format(format: ReportFormat, target: &OutputTarget) -> ReportFormat {
    match format {
        ReportFormat::Auto => match target {
            OutputTarget::File(path) => path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(ReportFormat::from_extension)
                .unwrap_or(ReportFormat::Csv),
            OutputTarget::Stdout if target.is_terminal() => ReportFormat::Table,
            OutputTarget::Stdout => ReportFormat::Csv,
        },
        other => other,
    }
}

/// Determine if color should be used based on flags and environment
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Path of one report section derived from the base output path.
///
/// `results/x.csv` becomes `results/x_detailed.csv`. The base extension is
/// kept when it already names `format`; otherwise the format's own extension
/// is used.
pub fn section_path(base: &Path, section: ReportSection, format: ReportFormat) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "metrics".to_string());

    let ext = base
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ReportFormat::from_extension(ext) == Some(format))
        .unwrap_or_else(|| format.extension());

    base.with_file_name(format!("{stem}{}.{ext}", section.suffix()))
}

/// Both report paths for a base output path, as `(detailed, summary)`.
pub fn derive_report_paths(base: &Path, format: ReportFormat) -> (PathBuf, PathBuf) {
    (
        section_path(base, ReportSection::Detailed, format),
        section_path(base, ReportSection::Summary, format),
    )
}

/// Write `content` to `path`, creating the parent directory first.
pub fn write_file(content: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output to {}", path.display()))?;
    tracing::info!("Report written to {}", path.display());
    Ok(())
}

/// Write output to stdout
pub fn write_stdout(content: &str) {
    print!("{content}");
    if !content.ends_with('\n') {
        println!();
    }
}
