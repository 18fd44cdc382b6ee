//! **Cohesion and granularity metrics for candidate microservice decompositions.**
//!
//! `msmetrics` scores how well a proposed split of a system into services
//! keeps related data and behaviour together. Given an entity catalogue, an
//! operation catalogue and one or more decomposition schemes, it computes:
//!
//! - **LCOM** (lack of cohesion) and **SGM** per service,
//! - **DGS** (data granularity), **FGS** (functional granularity) and their
//!   product per operation,
//! - **ALCOM**, **ASGM** and the largest service size per scheme.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the loaded domain: [`EntityCatalogue`], [`OperationCatalogue`],
//!   [`Scheme`] and [`DomainModel`].
//! - **[`parsers`]**: loaders for the three input kinds.
//! - **[`engine`]**: the [`MetricsEngine`], a pure function from a domain
//!   model to a [`MetricsTable`].
//! - **[`reports`]**: CSV, JSON, Markdown and terminal-table generators.
//! - **[`config`]**: the YAML configuration file, discovery and validation.
//! - **[`pipeline`]**: load → calculate → export stages shared by the CLI.
//!
//! ## Getting Started
//!
//! ```no_run
//! use msmetrics::{MetricsEngine, parsers::load_domain_model};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = load_domain_model(
//!         Path::new("data/entities.json"),
//!         Path::new("data/operations.yaml"),
//!         Path::new("data/schemes"),
//!     )?;
//!
//!     let table = MetricsEngine::new().calculate_metrics(&model);
//!     for summary in &table.summaries {
//!         println!(
//!             "{}: ALCOM={:.3} ASGM={:.3} NOO(max)={}",
//!             summary.scheme, summary.alcom, summary.asgm, summary.max_noo
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Custom weights and averaging
//!
//! ```
//! use msmetrics::engine::{AveragingPolicy, EngineConfig, MetricsEngine};
//! use msmetrics::model::OperationWeights;
//!
//! let config = EngineConfig::default()
//!     .with_weights(OperationWeights::empty().with("Create", 5).with("Read", 1))
//!     .with_type_map([("PlaceOrder", "Create")])
//!     .with_averaging(AveragingPolicy::Processed);
//! let engine = MetricsEngine::with_config(config);
//! assert_eq!(engine.config().operation_weight("PlaceOrder"), 5);
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `msmetrics` binary wraps the [`pipeline`] stages; run
//! `msmetrics --help` for usage.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Counts feed ratio formulas as f64; all values are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::similar_names,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use engine::{
    AveragingPolicy, EngineConfig, EngineError, MetricRecord, MetricsEngine, MetricsTable,
    SchemeMetrics, SchemeSummary,
};
pub use error::{ErrorContext, MetricsError, OptionContext, Result};
pub use model::{
    AttributeId, DomainModel, EntityCatalogue, Operation, OperationCatalogue, OperationType,
    OperationWeights, Scheme, Service,
};
pub use parsers::{ModelParser, ParseError, load_domain_model};
pub use reports::{ReportFormat, ReportGenerator};
