//! Scheme-level aggregation.

use super::service::compute_service_metrics;
use super::{EngineConfig, EngineError, SchemeMetrics};
use crate::model::{OperationCatalogue, Scheme};

/// Compute every service of a scheme and aggregate ALCOM, ASGM and Max NOO.
pub fn compute_scheme_metrics(
    scheme: &Scheme,
    operations: &OperationCatalogue,
    config: &EngineConfig,
) -> Result<SchemeMetrics, EngineError> {
    if scheme.services.is_empty() {
        return Err(EngineError::EmptyScheme);
    }

    let declared_services = scheme.service_count();
    let mut services = Vec::with_capacity(declared_services);
    let mut max_noo = 0;
    let mut lcom_sum = 0.0;
    let mut sgm_sum = 0.0;

    for service in &scheme.services {
        let Some(metrics) = compute_service_metrics(service, operations, config) else {
            continue;
        };
        max_noo = max_noo.max(metrics.noo);
        lcom_sum += metrics.lcom;
        sgm_sum += metrics.sgm;
        services.push(metrics);
    }

    let skipped_services = declared_services - services.len();
    let denominator = config
        .averaging
        .denominator(declared_services, services.len());
    let (alcom, asgm) = if denominator == 0 {
        (0.0, 0.0)
    } else {
        let n = denominator as f64;
        (lcom_sum / n, sgm_sum / n)
    };

    if skipped_services > 0 {
        tracing::debug!(
            scheme = %scheme.name,
            skipped_services,
            averaging = %config.averaging,
            "Averaging over {} of {} services",
            denominator,
            declared_services
        );
    }

    Ok(SchemeMetrics {
        scheme: scheme.name.clone(),
        services,
        alcom,
        asgm,
        max_noo,
        declared_services,
        skipped_services,
    })
}
