//! Configuration and domain model loading stage.

use crate::config::{AppConfig, InputPaths, Validatable};
use crate::error::OptionContext;
use crate::model::DomainModel;
use crate::parsers::load_domain_model;
use anyhow::Result;
use std::path::{Path, PathBuf};

use super::PipelineError;

/// Load the config file, layer `overrides` on top and validate the result.
///
/// Returns the effective config and the file it was read from, if any.
pub fn prepare_config(
    config_path: Option<&Path>,
    overrides: &AppConfig,
) -> Result<(AppConfig, Option<PathBuf>)> {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(config_path, overrides)?;

    match &loaded_from {
        Some(path) => tracing::info!("Loaded config from {}", path.display()),
        None => tracing::debug!("No config file found; using defaults and CLI arguments"),
    }

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(PipelineError::InvalidConfig {
            errors: errors.iter().map(ToString::to_string).collect(),
        }
        .into());
    }

    Ok((config, loaded_from))
}

/// Input paths of a validated config.
pub fn input_paths(config: &AppConfig) -> Result<InputPaths> {
    Ok(config
        .input_paths()
        .context_none("entities_file, operations_file and schemes_dir are required")?)
}

/// Load the domain model and log every dangling reference.
pub fn load_model(paths: &InputPaths) -> Result<DomainModel> {
    let model = load_domain_model(
        &paths.entities_file,
        &paths.operations_file,
        &paths.schemes_dir,
    )
    .map_err(|source| PipelineError::LoadFailed { source })?;

    tracing::info!(
        entities = model.entities.len(),
        operations = model.operations.len(),
        schemes = model.schemes.len(),
        "Domain model loaded"
    );

    for warning in model.reference_warnings() {
        tracing::warn!("{warning}");
    }

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_prepare_config_reports_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("msmetrics.yaml");
        fs::write(&config_path, "entities_file: entities.json\n").unwrap();

        let err = prepare_config(Some(&config_path), &AppConfig::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("operations_file"));
        assert!(message.contains("schemes_dir"));
    }

    #[test]
    fn test_prepare_config_overrides_fill_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("msmetrics.yaml");
        fs::write(&config_path, "entities_file: entities.json\n").unwrap();

        let overrides = AppConfig::builder()
            .operations_file(Some("ops.yaml".into()))
            .schemes_dir(Some("schemes".into()))
            .build();
        let (config, loaded_from) = prepare_config(Some(&config_path), &overrides).unwrap();
        assert_eq!(loaded_from.as_deref(), Some(config_path.as_path()));
        assert_eq!(config.entities_file, Some(dir.path().join("entities.json")));
        assert_eq!(config.operations_file, Some(PathBuf::from("ops.yaml")));
    }

    #[test]
    fn test_input_paths_requires_all_three() {
        let config = AppConfig::builder()
            .entities_file(Some("entities.json".into()))
            .build();
        let err = input_paths(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::MetricsError>(),
            Some(crate::MetricsError::Validation(_))
        ));
    }

    #[test]
    fn test_load_model_missing_schemes_dir() {
        let dir = tempfile::tempdir().unwrap();
        let entities = dir.path().join("entities.json");
        let operations = dir.path().join("operations.yaml");
        fs::write(&entities, r#"{"entities": []}"#).unwrap();
        fs::write(&operations, "operations: []\n").unwrap();

        let paths = InputPaths {
            entities_file: entities,
            operations_file: operations,
            schemes_dir: dir.path().join("missing"),
        };
        let err = load_model(&paths).unwrap_err();
        assert!(format!("{err:#}").contains("missing"));
    }
}
