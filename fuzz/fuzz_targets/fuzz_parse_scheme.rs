#![no_main]
use libfuzzer_sys::fuzz_target;
use msmetrics::engine::MetricsEngine;
use msmetrics::model::{OperationCatalogue, Scheme};
use msmetrics::parsers::{ModelParser, SchemeParser};

/// Fuzz the scheme loader and feed whatever parses into the engine.
///
/// With an empty operation catalogue every use case is unknown, which walks
/// the skip paths of the per-service computation.
fuzz_target!(|data: &[u8]| {
    if let Ok(services) = SchemeParser::new().parse_bytes(data) {
        let scheme = Scheme::new("fuzz", services);
        let _ = MetricsEngine::new().calculate_scheme_metrics(&scheme, &OperationCatalogue::new());
    }
});
