//! Cohesion and granularity metrics for decomposition schemes.
//!
//! Per service the engine computes LCOM (lack of cohesion) and SGM (service
//! granularity), per operation DGS and FGS, and per scheme the averages ALCOM
//! and ASGM together with the largest NOO.
//!
//! # Example
//!
//! ```
//! use msmetrics::engine::{EngineConfig, MetricsEngine};
//! use msmetrics::model::{
//!     AttributeId, DomainModel, EntityCatalogue, EntityDefinition, Operation, Scheme, Service,
//! };
//!
//! let id = AttributeId::new("Order", "id");
//! let status = AttributeId::new("Order", "status");
//! let model = DomainModel::new(
//!     EntityCatalogue::from_definitions([EntityDefinition::new("Order", ["id", "status"])]),
//!     [
//!         Operation::new("CreateOrder").writes([id.clone(), status.clone()]),
//!         Operation::new("GetOrder").reads([id, status]),
//!     ]
//!     .into_iter()
//!     .collect(),
//!     [Scheme::new(
//!         "monolith",
//!         vec![Service::new("OrderService", ["CreateOrder", "GetOrder"])],
//!     )],
//! );
//!
//! let engine = MetricsEngine::with_config(EngineConfig::default().parallel(true));
//! let table = engine.calculate_metrics(&model);
//! let summary = table.summary_for("monolith").unwrap();
//! assert_eq!(summary.alcom, 0.0);
//! assert_eq!(summary.asgm, 1.0);
//! assert_eq!(summary.max_noo, 2);
//! assert_eq!(table.records.len(), 2);
//! ```

mod batch;
mod engine_config;
mod result;
mod scheme;
mod service;

pub use batch::MetricsEngine;
pub use engine_config::{AveragingPolicy, EngineConfig, DEFAULT_FALLBACK_WEIGHT};
pub use result::{
    MetricRecord, MetricsTable, OperationMetrics, SchemeFailure, SchemeMetrics, SchemeSummary,
    ServiceMetrics,
};
pub use scheme::compute_scheme_metrics;
pub use service::{
    compute_service_metrics, data_granularity, functional_granularity, lack_of_cohesion,
};

use thiserror::Error;

/// Errors that abort the calculation of a single scheme.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("No services defined for this scheme")]
    EmptyScheme,
}
