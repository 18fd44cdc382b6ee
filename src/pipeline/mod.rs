//! Pipeline orchestration for metrics runs.
//!
//! This module provides the shared load → calculate → export stages used by
//! the CLI command handlers.

mod calculate_stage;
mod load;
mod output;
mod report_stage;

pub use calculate_stage::compute_metrics;
pub use load::{input_paths, load_model, prepare_config};
pub use output::{
    OutputTarget, auto_detect_format, derive_report_paths, section_path, should_use_color,
    write_file, write_stdout,
};
pub use report_stage::{ReportDestination, effective_format, output_report};

use crate::parsers::ParseError;
use crate::reports::ReportError;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The effective configuration failed validation
    #[error("Invalid configuration:\n  {}", errors.join("\n  "))]
    InvalidConfig { errors: Vec<String> },

    /// Failed to read or parse one of the input files
    #[error("Failed to load domain model: {source}")]
    LoadFailed {
        #[source]
        source: ParseError,
    },

    /// Report generation failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: ReportError,
    },
}

/// Exit codes for scripting and CI integration
pub mod exit_codes {
    /// Metrics were calculated and exported
    pub const SUCCESS: i32 = 0;
    /// Nothing to export (no schemes, or every scheme was rejected)
    pub const NO_DATA: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
