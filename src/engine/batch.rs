//! Batch entry point over every scheme of a domain model.

use super::scheme::compute_scheme_metrics;
use super::{EngineConfig, EngineError, MetricsTable, SchemeMetrics};
use crate::model::{DomainModel, OperationCatalogue, Scheme};
use rayon::prelude::*;

/// Metrics engine for decomposition schemes.
///
/// Holds only its configuration; every call is a pure function of the
/// domain model passed in.
#[derive(Debug, Clone, Default)]
pub struct MetricsEngine {
    config: EngineConfig,
}

impl MetricsEngine {
    /// Create an engine with default weights and averaging.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with an explicit configuration.
    #[must_use]
    pub const fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Metrics for a single scheme.
    pub fn calculate_scheme_metrics(
        &self,
        scheme: &Scheme,
        operations: &OperationCatalogue,
    ) -> Result<SchemeMetrics, EngineError> {
        compute_scheme_metrics(scheme, operations, &self.config)
    }

    /// Metrics for every scheme of the model.
    ///
    /// A scheme that fails is logged and recorded in
    /// [`MetricsTable::failures`]; the remaining schemes are still processed.
    /// Output order follows the model's scheme order in both sequential and
    /// parallel mode.
    #[must_use]
    pub fn calculate_metrics(&self, model: &DomainModel) -> MetricsTable {
        let mut table = MetricsTable::new();

        if model.schemes.is_empty() {
            tracing::warn!("No decomposition schemes available");
            return table;
        }

        let run = |scheme: &Scheme| {
            tracing::info!("Calculating metrics for scheme: {}", scheme.name);
            self.calculate_scheme_metrics(scheme, &model.operations)
        };

        let schemes: Vec<&Scheme> = model.schemes.values().collect();
        let outcomes: Vec<_> = if self.config.parallel {
            schemes
                .par_iter()
                .map(|scheme| (scheme.name.as_str(), run(scheme)))
                .collect()
        } else {
            schemes
                .iter()
                .map(|scheme| (scheme.name.as_str(), run(scheme)))
                .collect()
        };

        for (name, outcome) in outcomes {
            table.push(name, outcome);
        }

        tracing::info!(
            schemes = table.summaries.len(),
            failed = table.failures.len(),
            records = table.records.len(),
            "Metrics calculation finished"
        );

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AttributeId, EntityCatalogue, EntityDefinition, Operation, OperationCatalogue, Service,
    };

    fn model() -> DomainModel {
        let entities =
            EntityCatalogue::from_definitions([EntityDefinition::new("Order", ["id", "status"])]);
        let operations: OperationCatalogue = [
            Operation::new("CreateOrder").writes([
                AttributeId::new("Order", "id"),
                AttributeId::new("Order", "status"),
            ]),
            Operation::new("GetOrder").reads([
                AttributeId::new("Order", "id"),
                AttributeId::new("Order", "status"),
            ]),
        ]
        .into_iter()
        .collect();
        DomainModel::new(
            entities,
            operations,
            [
                Scheme::new("broken", Vec::new()),
                Scheme::new(
                    "monolith",
                    vec![Service::new("OrderService", ["CreateOrder", "GetOrder"])],
                ),
                Scheme::new(
                    "split",
                    vec![
                        Service::new("Writer", ["CreateOrder"]),
                        Service::new("Reader", ["GetOrder"]),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn test_failed_scheme_does_not_stop_batch() {
        let table = MetricsEngine::new().calculate_metrics(&model());

        assert_eq!(table.failures.len(), 1);
        assert_eq!(table.failures[0].scheme, "broken");
        assert!(matches!(table.failures[0].error, EngineError::EmptyScheme));

        let schemes: Vec<&str> = table.summaries.iter().map(|s| s.scheme.as_str()).collect();
        assert_eq!(schemes, vec!["monolith", "split"]);
        assert_eq!(table.records.len(), 4);
        assert_eq!(table.records_for("broken").count(), 0);
    }

    #[test]
    fn test_no_schemes_gives_empty_table() {
        let model = DomainModel::default();
        let table = MetricsEngine::new().calculate_metrics(&model);
        assert!(table.records.is_empty());
        assert!(table.summaries.is_empty());
        assert!(table.failures.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let model = model();
        let sequential = MetricsEngine::new().calculate_metrics(&model);
        let parallel =
            MetricsEngine::with_config(EngineConfig::default().parallel(true)).calculate_metrics(&model);

        assert_eq!(sequential.records, parallel.records);
        assert_eq!(sequential.summaries, parallel.summaries);
        assert_eq!(sequential.failures.len(), parallel.failures.len());
    }

    #[test]
    fn test_single_service_schemes_are_cohesive() {
        let table = MetricsEngine::new().calculate_metrics(&model());
        let split = table.summary_for("split").unwrap();
        // Each service has one op touching every attribute once
        assert!(split.alcom.abs() < 1e-9);
        assert!((split.asgm - 1.0).abs() < 1e-9);
        assert_eq!(split.max_noo, 1);
    }
}
