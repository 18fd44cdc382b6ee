//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.
//! Relative paths inside a config file are resolved against the directory
//! that contains it.

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAMES};
use super::types::{AppConfig, OutputConfig};
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Directories searched for a config file, in order.
///
/// 1. Current directory
/// 2. User config directory (`~/.config/msmetrics/` on Linux)
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join(CONFIG_DIR_NAME));
    }
    candidates
}

/// Every candidate config file path, in search order.
#[must_use]
pub fn config_search_paths() -> Vec<PathBuf> {
    config_search_dirs()
        .iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .collect()
}

/// Discover a config file by searching standard locations.
///
/// An explicit path wins if it exists; otherwise the search directories are
/// tried in order.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path
        && path.exists()
    {
        return Some(path.to_path_buf());
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml_ng::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml_ng::Error> for ConfigFileError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file, resolving relative paths against
/// the file's directory.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.is_file() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    // An empty file is an empty config
    let mut config = if content.trim().is_empty() {
        AppConfig::default()
    } else {
        serde_yaml_ng::from_str::<AppConfig>(&content)?
    };

    if let Some(base) = path.parent() {
        config.resolve_paths(base);
    }
    Ok(config)
}

/// Load config for a run.
///
/// An explicit path must exist and parse. Without one, the first discovered
/// file is loaded, or the default config is returned when none is found.
pub fn load_config(
    explicit_path: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    if let Some(path) = explicit_path {
        let config = load_config_file(path)?;
        return Ok((config, Some(path.to_path_buf())));
    }

    match discover_config_file(None) {
        Some(path) => {
            let config = load_config_file(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((AppConfig::default(), None)),
    }
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// This is useful for layering CLI args over file config. Only values
    /// that differ from the defaults override.
    pub fn merge(&mut self, other: &Self) {
        // Input paths
        if other.entities_file.is_some() {
            self.entities_file.clone_from(&other.entities_file);
        }
        if other.operations_file.is_some() {
            self.operations_file.clone_from(&other.operations_file);
        }
        if other.schemes_dir.is_some() {
            self.schemes_dir.clone_from(&other.schemes_dir);
        }

        // Operation types and weights
        for (operation, kind) in &other.op_type_map {
            self.op_type_map.insert(operation.clone(), kind.clone());
        }
        if other.op_weights.is_some() {
            self.op_weights.clone_from(&other.op_weights);
        }

        // Engine config
        let engine_defaults = super::types::EngineSection::default();
        if other.engine.averaging != engine_defaults.averaging {
            self.engine.averaging = other.engine.averaging;
        }
        if other.engine.default_operation_type != engine_defaults.default_operation_type {
            self.engine
                .default_operation_type
                .clone_from(&other.engine.default_operation_type);
        }
        if other.engine.fallback_weight != engine_defaults.fallback_weight {
            self.engine.fallback_weight = other.engine.fallback_weight;
        }
        if other.engine.parallel {
            self.engine.parallel = true;
        }

        // Output config - only override if explicitly set
        if other.output.format != ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> Result<(Self, Option<PathBuf>), ConfigFileError> {
        let (mut config, loaded_from) = load_config(config_path)?;
        config.merge(cli_overrides);
        Ok((config, loaded_from))
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::builder()
        .entities_file(Some("data/entities.json".into()))
        .operations_file(Some("data/operations.yaml".into()))
        .schemes_dir(Some("data/schemes".into()))
        .output_file(Some(OutputConfig::example_file()))
        .build();
    format!(
        r"# msmetrics configuration
# Place this file at msmetrics.yaml in your project root or ~/.config/msmetrics/

{}
",
        serde_yaml_ng::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# msmetrics Configuration File
# ============================
#
# Place it at msmetrics.yaml in your project root, or at
# ~/.config/msmetrics/msmetrics.yaml for a global config.
#
# Relative paths are resolved against this file's directory.
# CLI arguments always override file settings.

# Required inputs
entities_file: data/entities.json
operations_file: data/operations.yaml
schemes_dir: data/schemes

# Operation name -> type (Create, Update, Delete, Read, or any custom name).
# Operations not listed use engine.default_operation_type.
op_type_map:
  CreateOrder: Create
  CancelOrder: Delete

# Type -> weight. When present this table replaces the defaults below.
# op_weights:
#   Create: 4
#   Update: 3
#   Delete: 2
#   Read: 1

# Metrics engine
engine:
  # Denominator for ALCOM/ASGM: declared (every service) or processed
  # (only services with use cases)
  averaging: declared
  default_operation_type: Read
  # Weight for types missing from the weight table
  fallback_weight: 1
  # Process schemes in parallel
  parallel: false

# Output configuration
output:
  # Format: auto, csv, json, markdown, table
  format: auto
  # Base output path; writes <stem>_detailed<ext> and <stem>_summary<ext>.
  # Omit for stdout.
  file: results/microservices_metrics.csv
  # Disable colored output
  no_color: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
