//! Strict-then-tolerant text decoding.
//!
//! The strict pass requires valid UTF-8 and hands the text to the format
//! parser unchanged. If either step fails, the tolerant pass replaces invalid
//! UTF-8 sequences, strips a leading byte-order mark and parses again. The
//! tolerant pass's error is the one reported.

use super::ParseError;
use serde::de::DeserializeOwned;
use std::borrow::Cow;

const BOM: char = '\u{feff}';

/// Decode `bytes` with `parse`, retrying once with tolerant decoding.
pub fn decode_with<T, F>(bytes: &[u8], parse: F) -> Result<T, ParseError>
where
    F: Fn(&str) -> Result<T, ParseError>,
{
    if let Ok(text) = std::str::from_utf8(bytes)
        && let Ok(value) = parse(text)
    {
        return Ok(value);
    }

    tracing::debug!("Strict decoding failed, retrying with tolerant decoding");
    let text = tolerant_text(bytes);
    parse(&text)
}

/// Lossy UTF-8 with any leading BOM removed.
#[must_use]
pub fn tolerant_text(bytes: &[u8]) -> Cow<'_, str> {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => Cow::Borrowed(text.strip_prefix(BOM).unwrap_or(text)),
        Cow::Owned(text) => match text.strip_prefix(BOM) {
            Some(rest) => Cow::Owned(rest.to_string()),
            None => Cow::Owned(text),
        },
    }
}

pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ParseError> {
    decode_with(bytes, |text| serde_json::from_str(text).map_err(ParseError::from))
}

pub fn decode_yaml<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ParseError> {
    decode_with(bytes, |text| serde_yaml_ng::from_str(text).map_err(ParseError::from))
}
