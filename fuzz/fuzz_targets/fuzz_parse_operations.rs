#![no_main]
use libfuzzer_sys::fuzz_target;
use msmetrics::parsers::{ModelParser, OperationParser};

/// Fuzz the YAML operations loader.
fuzz_target!(|data: &[u8]| {
    let _ = OperationParser::new().parse_bytes(data);
});
