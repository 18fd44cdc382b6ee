//! Metrics calculation stage.
//!
//! Builds the engine from the effective config and runs it over every scheme
//! of the loaded model.

use crate::config::AppConfig;
use crate::engine::{MetricsEngine, MetricsTable};
use crate::model::DomainModel;

/// Run the metrics engine over every scheme of `model`.
#[must_use]
pub fn compute_metrics(config: &AppConfig, model: &DomainModel) -> MetricsTable {
    let engine = MetricsEngine::with_config(config.engine_config());
    tracing::info!(
        averaging = %config.engine.averaging,
        parallel = config.engine.parallel,
        "Computing metrics for {} scheme(s)",
        model.schemes.len()
    );

    let table = engine.calculate_metrics(model);

    for failure in &table.failures {
        tracing::warn!("Scheme skipped: {failure}");
    }

    table
}
