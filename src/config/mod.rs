//! Configuration module for msmetrics.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use msmetrics::config::{AppConfig, Validatable};
//! use msmetrics::config::file::load_config;
//!
//! let (mut config, loaded_from) = load_config(None)?;
//! config.merge(&AppConfig::builder().parallel(true).build());
//! assert!(config.is_valid());
//! let engine_config = config.engine_config();
//! ```
//!
//! # Configuration File
//!
//! Place a `msmetrics.yaml` file in your project root or `~/.config/msmetrics/`:
//!
//! ```yaml
//! entities_file: data/entities.json
//! operations_file: data/operations.yaml
//! schemes_dir: data/schemes
//! op_type_map:
//!   CreateOrder: Create
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{
    CONFIG_FILE_NAMES, DEFAULT_CONFIG_FILE_NAME, DEFAULT_OPERATION_TYPE, DEFAULT_OUTPUT_FILE,
    REQUIRED_KEYS,
};
pub use types::{AppConfig, AppConfigBuilder, EngineSection, InputPaths, OutputConfig};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    ConfigFileError, config_search_paths, discover_config_file, generate_example_config,
    generate_full_example_config, load_config, load_config_file, load_or_default,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `msmetrics.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
