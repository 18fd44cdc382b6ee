//! Configuration types for msmetrics.
//!
//! Mirrors the YAML config file: three required input paths, the operation
//! type map and weight table, and the `engine`/`output` sections.

use super::defaults::{DEFAULT_OPERATION_TYPE, DEFAULT_OUTPUT_FILE};
use crate::engine::{AveragingPolicy, DEFAULT_FALLBACK_WEIGHT, EngineConfig};
use crate::model::{OperationType, OperationWeights};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// The three input paths are required for a calculation run; they are
/// optional here so that a partial file can be layered with CLI overrides
/// before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Entity catalogue (JSON)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities_file: Option<PathBuf>,
    /// Operation catalogue (YAML)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations_file: Option<PathBuf>,
    /// Directory of scheme JSON files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemes_dir: Option<PathBuf>,
    /// Operation name → operation type (Create, Update, Delete, Read or custom)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub op_type_map: BTreeMap<String, String>,
    /// Operation type → weight. When present, replaces the default table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op_weights: Option<BTreeMap<String, i64>>,
    /// Metrics engine settings
    pub engine: EngineSection,
    /// Output settings
    pub output: OutputConfig,
}

/// Input locations after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub entities_file: PathBuf,
    pub operations_file: PathBuf,
    pub schemes_dir: PathBuf,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// The three input paths, if all are set.
    #[must_use]
    pub fn input_paths(&self) -> Option<InputPaths> {
        Some(InputPaths {
            entities_file: self.entities_file.clone()?,
            operations_file: self.operations_file.clone()?,
            schemes_dir: self.schemes_dir.clone()?,
        })
    }

    /// Effective weight table: the configured one, or the defaults.
    #[must_use]
    pub fn weights(&self) -> OperationWeights {
        self.op_weights.as_ref().map_or_else(OperationWeights::default, |table| {
            table
                .iter()
                .map(|(kind, weight)| (kind.as_str(), *weight))
                .collect()
        })
    }

    /// Build the engine configuration from this config.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_weights(self.weights())
            .with_type_map(
                self.op_type_map
                    .iter()
                    .map(|(name, kind)| (name.as_str(), OperationType::from(kind.as_str()))),
            )
            .with_default_type(self.engine.default_operation_type.as_str())
            .with_fallback_weight(self.engine.fallback_weight)
            .with_averaging(self.engine.averaging)
            .parallel(self.engine.parallel)
    }

    /// Resolve relative paths against `base` (the config file's directory).
    pub fn resolve_paths(&mut self, base: &Path) {
        for path in [
            &mut self.entities_file,
            &mut self.operations_file,
            &mut self.schemes_dir,
            &mut self.output.file,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the entity catalogue path.
    pub fn entities_file(mut self, path: Option<PathBuf>) -> Self {
        self.config.entities_file = path;
        self
    }

    /// Set the operations file path.
    pub fn operations_file(mut self, path: Option<PathBuf>) -> Self {
        self.config.operations_file = path;
        self
    }

    /// Set the schemes directory.
    pub fn schemes_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config.schemes_dir = path;
        self
    }

    /// Map an operation to a type.
    pub fn op_type(mut self, operation: impl Into<String>, kind: impl Into<String>) -> Self {
        self.config.op_type_map.insert(operation.into(), kind.into());
        self
    }

    /// Set a weight, switching to an explicit weight table.
    pub fn op_weight(mut self, kind: impl Into<String>, weight: i64) -> Self {
        self.config
            .op_weights
            .get_or_insert_with(BTreeMap::new)
            .insert(kind.into(), weight);
        self
    }

    pub const fn averaging(mut self, averaging: AveragingPolicy) -> Self {
        self.config.engine.averaging = averaging;
        self
    }

    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.config.engine.parallel = parallel;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Metrics engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EngineSection {
    /// Denominator for ALCOM/ASGM: every declared service, or only those
    /// that produced metrics
    pub averaging: AveragingPolicy,
    /// Type assumed for operations missing from `op_type_map`
    pub default_operation_type: String,
    /// Weight for operation types missing from the weight table
    pub fallback_weight: i64,
    /// Process schemes in parallel
    pub parallel: bool,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            averaging: AveragingPolicy::default(),
            default_operation_type: DEFAULT_OPERATION_TYPE.to_string(),
            fallback_weight: DEFAULT_FALLBACK_WEIGHT,
            parallel: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Base output path; `_detailed` and `_summary` are appended to the stem.
    /// None writes both tables to stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Auto,
            file: None,
            no_color: false,
        }
    }
}

impl OutputConfig {
    /// The output path suggested in generated example configs.
    #[must_use]
    pub fn example_file() -> PathBuf {
        PathBuf::from(DEFAULT_OUTPUT_FILE)
    }
}
