//! Configuration validation for msmetrics.
//!
//! Provides validation traits and implementations for all configuration types.

use super::defaults::REQUIRED_KEYS;
use super::types::{AppConfig, EngineSection, OutputConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let present = [
            self.entities_file.is_some(),
            self.operations_file.is_some(),
            self.schemes_dir.is_some(),
        ];
        for (key, present) in REQUIRED_KEYS.iter().zip(present) {
            if !present {
                errors.push(ConfigError::new(
                    *key,
                    format!("Missing required key in config: {key}"),
                ));
            }
        }

        for (operation, kind) in &self.op_type_map {
            if kind.trim().is_empty() {
                errors.push(ConfigError::new(
                    format!("op_type_map.{operation}"),
                    "Operation type must not be empty",
                ));
            }
        }

        if let Some(ref weights) = self.op_weights {
            if weights.is_empty() {
                errors.push(ConfigError::new(
                    "op_weights",
                    "Weight table is empty; every operation would use the fallback weight",
                ));
            }
            for kind in weights.keys() {
                if kind.trim().is_empty() {
                    errors.push(ConfigError::new(
                        "op_weights",
                        "Operation type names must not be empty",
                    ));
                }
            }
        }

        errors.extend(self.engine.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for EngineSection {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.default_operation_type.trim().is_empty() {
            errors.push(ConfigError::new(
                "engine.default_operation_type",
                "Default operation type must not be empty",
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate output file path if specified
        if let Some(ref file_path) = self.file {
            if file_path.file_stem().is_none() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Output path has no file name: {}", file_path.display()),
                ));
            }
            if let Some(parent) = file_path.parent()
                && !parent.as_os_str().is_empty()
                && parent.exists()
                && !parent.is_dir()
            {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent path is not a directory: {}", parent.display()),
                ));
            }
        }

        errors
    }
}
