//! Per-service cohesion and granularity.

use super::{EngineConfig, OperationMetrics, ServiceMetrics};
use crate::model::{AttributeId, Operation, OperationCatalogue, Service};
use std::collections::{HashMap, HashSet};

/// LCOM = 1 − MF/(M·F), or 0 when M·F is 0. Not clamped.
#[must_use]
pub fn lack_of_cohesion(m: usize, f: usize, mf: usize) -> f64 {
    let denominator = m * f;
    if denominator == 0 {
        0.0
    } else {
        1.0 - mf as f64 / denominator as f64
    }
}

/// DGS = min(1, IPR/max(1,FP) + OPR/max(1,CP)).
#[must_use]
pub fn data_granularity(ipr: usize, opr: usize, fp: usize, cp: usize) -> f64 {
    let reads = ipr as f64 / fp.max(1) as f64;
    let writes = opr as f64 / cp.max(1) as f64;
    (reads + writes).min(1.0)
}

/// FGS = OT/O, or 0 unless the service weight is positive.
#[must_use]
pub fn functional_granularity(ot: i64, service_weight: i64) -> f64 {
    if service_weight > 0 {
        ot as f64 / service_weight as f64
    } else {
        0.0
    }
}

/// Attribute accesses of one service, discarded once the service is done.
#[derive(Debug, Default)]
struct AccessProfile<'a> {
    all: HashSet<&'a AttributeId>,
    read: HashSet<&'a AttributeId>,
    write: HashSet<&'a AttributeId>,
    /// Accesses per attribute; a read and a write by one operation count twice
    counts: HashMap<&'a AttributeId, usize>,
}

impl<'a> AccessProfile<'a> {
    fn record(&mut self, operation: &'a Operation) {
        for id in &operation.read {
            self.all.insert(id);
            self.read.insert(id);
            *self.counts.entry(id).or_default() += 1;
        }
        for id in &operation.write {
            self.all.insert(id);
            self.write.insert(id);
            *self.counts.entry(id).or_default() += 1;
        }
    }

    fn total_accesses(&self) -> usize {
        self.counts.values().sum()
    }

    fn read_surface(&self) -> usize {
        self.read.len().max(1)
    }

    fn write_surface(&self) -> usize {
        self.write.len().max(1)
    }
}

/// Compute metrics for one service.
///
/// Returns `None` for a service with no use cases. Use cases without an
/// operation definition still count towards NOO but contribute no
/// attributes and produce no operation row.
pub fn compute_service_metrics(
    service: &Service,
    operations: &OperationCatalogue,
    config: &EngineConfig,
) -> Option<ServiceMetrics> {
    if service.use_cases.is_empty() {
        tracing::warn!("Service {} has no use cases", service.name);
        return None;
    }

    let noo = service.operation_count();

    let mut known = Vec::with_capacity(noo);
    let mut profile = AccessProfile::default();
    for use_case in &service.use_cases {
        match operations.get(use_case) {
            Some(operation) => {
                profile.record(operation);
                known.push(operation);
            }
            None => {
                tracing::warn!(
                    service = %service.name,
                    "Operation '{}' definition not found",
                    use_case
                );
            }
        }
    }

    let mf = profile.total_accesses();
    let m = noo;
    let f = profile.all.len();
    let lcom = lack_of_cohesion(m, f, mf);

    let fp = profile.read_surface();
    let cp = profile.write_surface();

    let weighted: Vec<(&Operation, i64)> = known
        .into_iter()
        .map(|operation| (operation, config.operation_weight(&operation.name)))
        .collect();
    let service_weight = weighted
        .iter()
        .fold(0_i64, |total, (_, ot)| total.saturating_add(*ot));

    let operations: Vec<OperationMetrics> = weighted
        .into_iter()
        .map(|(operation, ot)| {
            let ipr = operation.read.len();
            let opr = operation.write.len();
            let dgs = data_granularity(ipr, opr, fp, cp);
            let fgs = functional_granularity(ot, service_weight);
            OperationMetrics {
                operation: operation.name.clone(),
                ipr,
                opr,
                fp,
                cp,
                ot,
                dgs,
                fgs,
                sgm_operation: dgs * fgs,
            }
        })
        .collect();

    let sgm: f64 = operations.iter().map(|op| op.sgm_operation).sum();

    tracing::debug!(
        service = %service.name,
        noo,
        mf,
        f,
        lcom,
        sgm,
        "Service metrics computed"
    );

    Some(ServiceMetrics {
        service: service.name.clone(),
        noo,
        lcom,
        sgm,
        mf,
        m,
        f,
        service_weight,
        operations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(entity: &str, name: &str) -> AttributeId {
        AttributeId::new(entity, name)
    }

    fn order_catalogue() -> OperationCatalogue {
        [
            Operation::new("CreateOrder").writes([attr("Order", "id"), attr("Order", "status")]),
            Operation::new("GetOrder").reads([attr("Order", "id"), attr("Order", "status")]),
        ]
        .into_iter()
        .collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_order_service() {
        let config =
            EngineConfig::default().with_type_map([("CreateOrder", "Create"), ("GetOrder", "Read")]);
        let service = Service::new("OrderService", ["CreateOrder", "GetOrder"]);

        let metrics = compute_service_metrics(&service, &order_catalogue(), &config).unwrap();

        assert_eq!(metrics.noo, 2);
        assert_eq!(metrics.m, 2);
        assert_eq!(metrics.f, 2);
        assert_eq!(metrics.mf, 4);
        assert!(approx(metrics.lcom, 0.0));
        assert_eq!(metrics.service_weight, 5);

        let create = &metrics.operations[0];
        assert_eq!((create.ipr, create.opr, create.fp, create.cp), (0, 2, 2, 2));
        assert_eq!(create.ot, 4);
        assert!(approx(create.dgs, 1.0));
        assert!(approx(create.fgs, 0.8));
        assert!(approx(create.sgm_operation, 0.8));

        let get = &metrics.operations[1];
        assert_eq!((get.ipr, get.opr, get.fp, get.cp), (2, 0, 2, 2));
        assert!(approx(get.fgs, 0.2));
        assert!(approx(get.sgm_operation, 0.2));

        assert!(approx(metrics.sgm, 1.0));
    }

    #[test]
    fn test_empty_service_is_skipped() {
        let service = Service::new("Idle", Vec::<String>::new());
        assert!(
            compute_service_metrics(&service, &order_catalogue(), &EngineConfig::default())
                .is_none()
        );
    }

    #[test]
    fn test_unknown_operation_counts_in_noo_only() {
        let service = Service::new("OrderService", ["GetOrder", "Refund"]);
        let metrics =
            compute_service_metrics(&service, &order_catalogue(), &EngineConfig::default())
                .unwrap();

        assert_eq!(metrics.noo, 2);
        assert_eq!(metrics.operations.len(), 1);
        assert_eq!(metrics.mf, 2);
        assert_eq!(metrics.f, 2);
        // 1 - 2/(2*2)
        assert!(approx(metrics.lcom, 0.5));
        assert_eq!(metrics.service_weight, 1);
    }

    #[test]
    fn test_only_unknown_operations() {
        let service = Service::new("Ghost", ["Nope"]);
        let metrics =
            compute_service_metrics(&service, &order_catalogue(), &EngineConfig::default())
                .unwrap();
        assert_eq!(metrics.f, 0);
        assert!(approx(metrics.lcom, 0.0));
        assert!(metrics.operations.is_empty());
        assert!(approx(metrics.sgm, 0.0));
    }

    #[test]
    fn test_disjoint_access_raises_lcom() {
        let catalogue: OperationCatalogue = [
            Operation::new("A").reads([attr("X", "a")]),
            Operation::new("B").reads([attr("X", "b")]),
            Operation::new("C").reads([attr("X", "c")]),
        ]
        .into_iter()
        .collect();
        let service = Service::new("Loose", ["A", "B", "C"]);

        let metrics =
            compute_service_metrics(&service, &catalogue, &EngineConfig::default()).unwrap();
        // 1 - 3/(3*3)
        assert!(approx(metrics.lcom, 2.0 / 3.0));
    }

    #[test]
    fn test_read_and_write_of_same_attribute_counts_twice() {
        let catalogue: OperationCatalogue = [Operation::new("Bump")
            .reads([attr("Counter", "value")])
            .writes([attr("Counter", "value")])]
        .into_iter()
        .collect();
        let service = Service::new("Counter", ["Bump"]);

        let metrics =
            compute_service_metrics(&service, &catalogue, &EngineConfig::default()).unwrap();
        assert_eq!(metrics.mf, 2);
        assert_eq!(metrics.f, 1);
        // Unclamped: 1 - 2/(1*1)
        assert!(approx(metrics.lcom, -1.0));
        // DGS capped even though 1/1 + 1/1 = 2
        assert!(approx(metrics.operations[0].dgs, 1.0));
    }

    #[test]
    fn test_repeated_use_case_counts_each_time() {
        let service = Service::new("Echo", ["GetOrder", "GetOrder"]);
        let metrics =
            compute_service_metrics(&service, &order_catalogue(), &EngineConfig::default())
                .unwrap();
        assert_eq!(metrics.noo, 2);
        assert_eq!(metrics.mf, 4);
        assert_eq!(metrics.operations.len(), 2);
        assert!(approx(metrics.operations[0].fgs, 0.5));
    }

    #[test]
    fn test_zero_weights_give_zero_fgs() {
        let weights = crate::model::OperationWeights::empty();
        let config = EngineConfig::default()
            .with_weights(weights)
            .with_fallback_weight(0);
        let service = Service::new("OrderService", ["CreateOrder", "GetOrder"]);
        let metrics = compute_service_metrics(&service, &order_catalogue(), &config).unwrap();
        assert_eq!(metrics.service_weight, 0);
        assert!(metrics.operations.iter().all(|op| op.fgs == 0.0));
        assert!(approx(metrics.sgm, 0.0));
    }

    #[test]
    fn test_large_weights_do_not_overflow() {
        let config = EngineConfig::default()
            .with_weights(crate::model::OperationWeights::empty().with("Create", 3_000_000_000))
            .with_type_map([("CreateOrder", "Create")]);
        let service = Service::new("Bulk", ["CreateOrder", "CreateOrder"]);

        let metrics = compute_service_metrics(&service, &order_catalogue(), &config).unwrap();
        assert_eq!(metrics.service_weight, 6_000_000_000);
        assert!(approx(metrics.operations[0].fgs, 0.5));
        assert!(approx(metrics.sgm, 1.0));
    }

    #[test]
    fn test_service_weight_saturates() {
        let config = EngineConfig::default()
            .with_weights(crate::model::OperationWeights::empty().with("Create", i64::MAX))
            .with_type_map([("CreateOrder", "Create")]);
        let service = Service::new("Bulk", ["CreateOrder", "CreateOrder"]);

        let metrics = compute_service_metrics(&service, &order_catalogue(), &config).unwrap();
        assert_eq!(metrics.service_weight, i64::MAX);
    }

    #[test]
    fn test_negative_weights() {
        let catalogue = order_catalogue();
        let service = Service::new("OrderService", ["CreateOrder", "GetOrder"]);

        // O = -1 + 3 = 2, so FGS leaves the [0, 1] range
        let config = EngineConfig::default()
            .with_weights(
                crate::model::OperationWeights::empty()
                    .with("Create", -1)
                    .with("Read", 3),
            )
            .with_type_map([("CreateOrder", "Create")]);
        let metrics = compute_service_metrics(&service, &catalogue, &config).unwrap();
        assert_eq!(metrics.service_weight, 2);
        assert_eq!(metrics.operations[0].ot, -1);
        assert!(approx(metrics.operations[0].fgs, -0.5));
        assert!(approx(metrics.operations[1].fgs, 1.5));

        // O = -2 + 1 <= 0, so every FGS is 0
        let config = EngineConfig::default()
            .with_weights(
                crate::model::OperationWeights::empty()
                    .with("Create", -2)
                    .with("Read", 1),
            )
            .with_type_map([("CreateOrder", "Create")]);
        let metrics = compute_service_metrics(&service, &catalogue, &config).unwrap();
        assert_eq!(metrics.service_weight, -1);
        assert!(metrics.operations.iter().all(|op| op.fgs == 0.0));
        assert!(approx(metrics.sgm, 0.0));
    }

    #[test]
    fn test_formula_helpers() {
        assert!(approx(lack_of_cohesion(0, 5, 0), 0.0));
        assert!(approx(lack_of_cohesion(2, 4, 4), 0.5));
        assert!(approx(data_granularity(0, 0, 0, 0), 0.0));
        assert!(approx(data_granularity(1, 1, 4, 2), 0.75));
        assert!(approx(data_granularity(3, 3, 3, 3), 1.0));
        assert!(approx(functional_granularity(3, 0), 0.0));
        assert!(approx(functional_granularity(1, 4), 0.25));
        assert!(approx(functional_granularity(2, -3), 0.0));
    }
}
