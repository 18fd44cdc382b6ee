//! Result types produced by the metrics engine.

use super::EngineError;
use serde::Serialize;

/// Granularity figures for one operation inside one service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationMetrics {
    pub operation: String,
    /// |read set| of the operation
    pub ipr: usize,
    /// |write set| of the operation
    pub opr: usize,
    /// |service read surface|, floored at 1
    pub fp: usize,
    /// |service write surface|, floored at 1
    pub cp: usize,
    /// Type weight of the operation
    pub ot: i64,
    pub dgs: f64,
    pub fgs: f64,
    pub sgm_operation: f64,
}

/// Cohesion and granularity of one service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceMetrics {
    pub service: String,
    pub noo: usize,
    pub lcom: f64,
    pub sgm: f64,
    /// Total attribute accesses (Σ of the per-attribute counter)
    pub mf: usize,
    /// Number of operations used for LCOM (equals NOO)
    pub m: usize,
    /// Distinct attributes touched by the service
    pub f: usize,
    /// Σ OT over the service's known operations
    pub service_weight: i64,
    /// One entry per known use case, in assignment order
    pub operations: Vec<OperationMetrics>,
}

/// Metrics for a whole scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeMetrics {
    pub scheme: String,
    pub services: Vec<ServiceMetrics>,
    pub alcom: f64,
    pub asgm: f64,
    pub max_noo: usize,
    pub declared_services: usize,
    pub skipped_services: usize,
}

impl SchemeMetrics {
    /// Flatten into detail rows, one per (service, operation).
    #[must_use]
    pub fn records(&self) -> Vec<MetricRecord> {
        self.services
            .iter()
            .flat_map(|service| {
                service
                    .operations
                    .iter()
                    .map(move |op| MetricRecord::new(&self.scheme, service, op))
            })
            .collect()
    }

    #[must_use]
    pub fn summary(&self) -> SchemeSummary {
        SchemeSummary {
            scheme: self.scheme.clone(),
            alcom: self.alcom,
            asgm: self.asgm,
            max_noo: self.max_noo,
            services: self.declared_services,
            skipped_services: self.skipped_services,
        }
    }
}

/// One detail row of the exported report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRecord {
    #[serde(rename = "Scheme")]
    pub scheme: String,
    #[serde(rename = "Service")]
    pub service: String,
    #[serde(rename = "NOO")]
    pub noo: usize,
    #[serde(rename = "LCOM")]
    pub lcom: f64,
    #[serde(rename = "SGM")]
    pub sgm: f64,
    #[serde(rename = "MF")]
    pub mf: usize,
    #[serde(rename = "M")]
    pub m: usize,
    #[serde(rename = "F")]
    pub f: usize,
    #[serde(rename = "Operation")]
    pub operation: String,
    #[serde(rename = "IPR")]
    pub ipr: usize,
    #[serde(rename = "OPR")]
    pub opr: usize,
    #[serde(rename = "FP")]
    pub fp: usize,
    #[serde(rename = "CP")]
    pub cp: usize,
    #[serde(rename = "OT")]
    pub ot: i64,
    #[serde(rename = "O")]
    pub o: i64,
    #[serde(rename = "DGS")]
    pub dgs: f64,
    #[serde(rename = "FGS")]
    pub fgs: f64,
    #[serde(rename = "SGM_Operation")]
    pub sgm_operation: f64,
}

impl MetricRecord {
    fn new(scheme: &str, service: &ServiceMetrics, op: &OperationMetrics) -> Self {
        Self {
            scheme: scheme.to_string(),
            service: service.service.clone(),
            noo: service.noo,
            lcom: service.lcom,
            sgm: service.sgm,
            mf: service.mf,
            m: service.m,
            f: service.f,
            operation: op.operation.clone(),
            ipr: op.ipr,
            opr: op.opr,
            fp: op.fp,
            cp: op.cp,
            ot: op.ot,
            o: service.service_weight,
            dgs: op.dgs,
            fgs: op.fgs,
            sgm_operation: op.sgm_operation,
        }
    }
}

/// One row of the scheme summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeSummary {
    #[serde(rename = "Scheme")]
    pub scheme: String,
    #[serde(rename = "ALCOM")]
    pub alcom: f64,
    #[serde(rename = "ASGM")]
    pub asgm: f64,
    #[serde(rename = "NOO(max)")]
    pub max_noo: usize,
    #[serde(rename = "Services")]
    pub services: usize,
    #[serde(rename = "Skipped")]
    pub skipped_services: usize,
}

/// A scheme the engine rejected.
#[derive(Debug)]
pub struct SchemeFailure {
    pub scheme: String,
    pub error: EngineError,
}

impl std::fmt::Display for SchemeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.scheme, self.error)
    }
}

/// Output of one batch pass over every scheme.
#[derive(Debug, Default)]
pub struct MetricsTable {
    /// Detail rows, grouped by scheme then service
    pub records: Vec<MetricRecord>,
    /// One row per successfully processed scheme
    pub summaries: Vec<SchemeSummary>,
    /// Schemes that were rejected
    pub failures: Vec<SchemeFailure>,
}

impl MetricsTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the outcome of one scheme.
    pub fn push(&mut self, scheme: &str, outcome: Result<SchemeMetrics, EngineError>) {
        match outcome {
            Ok(metrics) => {
                self.records.extend(metrics.records());
                self.summaries.push(metrics.summary());
            }
            Err(error) => {
                tracing::error!("Error processing scheme {}: {}", scheme, error);
                self.failures.push(SchemeFailure {
                    scheme: scheme.to_string(),
                    error,
                });
            }
        }
    }

    /// True when there is nothing worth exporting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() || self.summaries.is_empty()
    }

    #[must_use]
    pub fn summary_for(&self, scheme: &str) -> Option<&SchemeSummary> {
        self.summaries.iter().find(|s| s.scheme == scheme)
    }

    pub fn records_for<'a>(&'a self, scheme: &'a str) -> impl Iterator<Item = &'a MetricRecord> {
        self.records.iter().filter(move |r| r.scheme == scheme)
    }
}
