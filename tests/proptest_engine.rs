//! Property-based tests for the metrics engine.
//!
//! Random operation catalogues and schemes; checks the invariants that must
//! hold whatever the input.

use msmetrics::engine::{
    AveragingPolicy, EngineConfig, compute_scheme_metrics, data_granularity,
    functional_granularity, lack_of_cohesion,
};
use msmetrics::model::{AttributeId, Operation, OperationCatalogue, Scheme, Service};
use proptest::prelude::*;

const OPERATIONS: [&str; 6] = ["Create", "Read", "Update", "Delete", "List", "Audit"];

/// A catalogue over a small attribute universe so accesses overlap.
fn catalogue_strategy() -> impl Strategy<Value = OperationCatalogue> {
    let access = prop::collection::vec((0usize..3, 0usize..4), 0..5);
    prop::collection::vec((access.clone(), access), OPERATIONS.len()).prop_map(|accesses| {
        OPERATIONS
            .iter()
            .zip(accesses)
            .map(|(name, (reads, writes))| {
                let id = |(e, a): (usize, usize)| AttributeId::new(&format!("E{e}"), &format!("a{a}"));
                Operation::new(*name)
                    .reads(reads.into_iter().map(id))
                    .writes(writes.into_iter().map(id))
            })
            .collect()
    })
}

/// Services referencing known and unknown operations, possibly empty.
fn scheme_strategy() -> impl Strategy<Value = Scheme> {
    let use_case = prop_oneof![
        4 => prop::sample::select(OPERATIONS.to_vec()).prop_map(str::to_string),
        1 => "[A-Z][a-z]{2,6}X",
    ];
    prop::collection::vec(prop::collection::vec(use_case, 0..6), 1..5).prop_map(|services| {
        Scheme::new(
            "random",
            services
                .into_iter()
                .enumerate()
                .map(|(i, use_cases)| Service::new(format!("S{i}"), use_cases))
                .collect(),
        )
    })
}

fn config_strategy() -> impl Strategy<Value = EngineConfig> {
    (prop::bool::ANY, prop::bool::ANY).prop_map(|(processed, typed)| {
        let averaging = if processed {
            AveragingPolicy::Processed
        } else {
            AveragingPolicy::Declared
        };
        let config = EngineConfig::default().with_averaging(averaging);
        if typed {
            config.with_type_map([("Create", "Create"), ("Update", "Update"), ("Delete", "Delete")])
        } else {
            config
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn dgs_never_exceeds_one(ipr in 0usize..50, opr in 0usize..50, fp in 0usize..50, cp in 0usize..50) {
        let dgs = data_granularity(ipr, opr, fp, cp);
        prop_assert!(dgs <= 1.0);
        prop_assert!(dgs >= 0.0);
    }

    #[test]
    fn fgs_is_a_share(ot in 0i64..10, rest in 0i64..40) {
        let fgs = functional_granularity(ot, ot + rest);
        prop_assert!((0.0..=1.0).contains(&fgs));
    }

    #[test]
    fn lcom_never_exceeds_one(m in 0usize..20, f in 0usize..20, mf in 0usize..400) {
        prop_assert!(lack_of_cohesion(m, f, mf) <= 1.0);
    }

    #[test]
    fn scheme_invariants(
        operations in catalogue_strategy(),
        scheme in scheme_strategy(),
        config in config_strategy(),
    ) {
        let metrics = compute_scheme_metrics(&scheme, &operations, &config).unwrap();

        let longest = scheme.services.iter().map(|s| s.use_cases.len()).max().unwrap_or(0);
        prop_assert_eq!(metrics.max_noo, longest);
        prop_assert_eq!(metrics.declared_services, scheme.services.len());

        for service in &metrics.services {
            prop_assert!(service.lcom <= 1.0);
            for op in &service.operations {
                prop_assert!(op.dgs <= 1.0);
                prop_assert!(op.fp >= 1 && op.cp >= 1);
            }
            if service.service_weight > 0 {
                let total: f64 = service.operations.iter().map(|op| op.fgs).sum();
                prop_assert!((total - 1.0).abs() < 1e-9, "sum of FGS was {}", total);
            }
            let sgm: f64 = service.operations.iter().map(|op| op.sgm_operation).sum();
            prop_assert!((sgm - service.sgm).abs() < 1e-9);
        }

        let records = metrics.records();
        let known: usize = metrics.services.iter().map(|s| s.operations.len()).sum();
        prop_assert_eq!(records.len(), known);
    }

    #[test]
    fn processed_average_never_below_declared(
        operations in catalogue_strategy(),
        scheme in scheme_strategy(),
    ) {
        let declared = compute_scheme_metrics(&scheme, &operations, &EngineConfig::default()).unwrap();
        let processed = compute_scheme_metrics(
            &scheme,
            &operations,
            &EngineConfig::default().with_averaging(AveragingPolicy::Processed),
        )
        .unwrap();

        // SGM is non-negative, so dropping skipped services can only raise ASGM
        prop_assert!(processed.asgm + 1e-12 >= declared.asgm);
        if declared.skipped_services == 0 {
            prop_assert_eq!(declared.asgm, processed.asgm);
            prop_assert_eq!(declared.alcom, processed.alcom);
        }
    }
}
