#![no_main]
use libfuzzer_sys::fuzz_target;
use msmetrics::parsers::{EntityParser, ModelParser};

/// Fuzz the entity catalogue loader.
///
/// Raw bytes go straight to `parse_bytes`, so both the strict and the
/// tolerant (BOM-stripping, lossy UTF-8) decode paths are exercised.
fuzz_target!(|data: &[u8]| {
    let _ = EntityParser::new().parse_bytes(data);
});
