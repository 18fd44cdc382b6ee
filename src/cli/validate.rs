//! Validate command handler.
//!
//! Implements the `validate` subcommand: check the config and every input
//! file without computing metrics, and list dangling references.

use crate::config::AppConfig;
use crate::model::DomainModel;
use crate::pipeline::{exit_codes, input_paths, load_model, prepare_config, write_stdout};
use anyhow::Result;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Run the validate command, returning the desired exit code.
///
/// Exits with [`exit_codes::NO_DATA`] when no scheme was loaded, or when
/// `fail_on_warning` is set and a reference warning was found.
pub fn run_validate(
    config_path: Option<&Path>,
    overrides: &AppConfig,
    fail_on_warning: bool,
) -> Result<i32> {
    let (config, loaded_from) = prepare_config(config_path, overrides)?;
    let paths = input_paths(&config)?;
    let model = load_model(&paths)?;

    let warning_count = model.reference_warnings().len();
    write_stdout(&validation_summary(&model, loaded_from.as_ref())?);

    if model.schemes.is_empty() || (fail_on_warning && warning_count > 0) {
        return Ok(exit_codes::NO_DATA);
    }
    Ok(exit_codes::SUCCESS)
}

/// Human-readable overview of a loaded model.
fn validation_summary(
    model: &DomainModel,
    loaded_from: Option<&PathBuf>,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let config = loaded_from.map_or_else(
        || "(none, CLI arguments only)".to_string(),
        |p| p.display().to_string(),
    );

    writeln!(out, "Config:     {config}")?;
    writeln!(
        out,
        "Entities:   {} ({} attributes)",
        model.entities.len(),
        model.entities.attribute_count()
    )?;
    writeln!(out, "Operations: {}", model.operations.len())?;
    writeln!(out, "Schemes:    {}", model.schemes.len())?;
    for scheme in model.schemes.values() {
        writeln!(
            out,
            "  {}: {} services, {} use cases",
            scheme.name,
            scheme.service_count(),
            scheme.use_cases().count()
        )?;
    }

    let warnings = model.reference_warnings();
    if warnings.is_empty() {
        writeln!(out, "\nNo dangling references.")?;
    } else {
        writeln!(out, "\nWarnings:   {}", warnings.len())?;
        for warning in &warnings {
            writeln!(out, "  - {warning}")?;
        }
    }
    Ok(out)
}
