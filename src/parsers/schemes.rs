//! Decomposition scheme parser (one JSON file per scheme).
//!
//! ```json
//! {
//!   "services": [{"name": "OrderService"}],
//!   "useCaseResponsibility": {"OrderService": ["CreateOrder"]}
//! }
//! ```
//!
//! The scheme is named after the file stem.

use super::decode::decode_json;
use super::{ModelParser, ParseError};
use crate::model::{Scheme, Service};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct SchemeDocument {
    services: Option<Vec<RawService>>,
    #[serde(rename = "useCaseResponsibility")]
    use_case_responsibility: Option<IndexMap<String, Vec<String>>>,
}

#[derive(Debug, Deserialize)]
struct RawService {
    name: Option<String>,
}

/// Parser for a single scheme file. Produces the scheme's services.
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemeParser;

impl SchemeParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse a scheme file, naming the scheme after the file stem.
    pub fn parse_scheme(&self, path: &Path) -> Result<Scheme, ParseError> {
        let name = scheme_name(path)?;
        let services = self.parse(path)?;
        Ok(Scheme::new(name, services))
    }
}

impl ModelParser for SchemeParser {
    type Output = Vec<Service>;

    fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<Service>, ParseError> {
        let document: SchemeDocument = decode_json(bytes)?;
        let raw = document
            .services
            .ok_or_else(|| ParseError::MissingField("services".to_string()))?;
        let responsibility = document.use_case_responsibility.unwrap_or_default();

        let services = raw
            .into_iter()
            .filter_map(|service| service.name)
            .map(|name| {
                // Duplicate service names share one use-case list
                let use_cases = responsibility.get(&name).cloned().unwrap_or_default();
                Service::new(name, use_cases)
            })
            .collect();
        Ok(services)
    }

    fn format_name(&self) -> &str {
        "scheme (JSON)"
    }
}

fn scheme_name(path: &Path) -> Result<String, ParseError> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| ParseError::InvalidStructure(format!("{} has no file name", path.display())))
}

/// Every `*.json` file in `dir`, sorted by file name.
pub fn scheme_files(dir: &Path) -> Result<Vec<PathBuf>, ParseError> {
    if !dir.is_dir() {
        return Err(ParseError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Load every scheme in a directory.
///
/// Files that fail to parse or lack `services` are skipped with a warning.
/// An empty directory yields no schemes.
pub fn parse_schemes_dir(dir: &Path) -> Result<Vec<Scheme>, ParseError> {
    tracing::info!("Loading schemes directory: {}", dir.display());
    let files = scheme_files(dir)?;

    if files.is_empty() {
        tracing::warn!("No JSON files found in {}", dir.display());
        return Ok(Vec::new());
    }

    let parser = SchemeParser::new();
    let mut schemes = Vec::with_capacity(files.len());
    for path in &files {
        match parser.parse_scheme(path) {
            Ok(scheme) => {
                tracing::info!(
                    "Loaded scheme: {} ({} services)",
                    scheme.name,
                    scheme.service_count()
                );
                schemes.push(scheme);
            }
            Err(err) => {
                tracing::warn!("Skipping scheme file: {}", err);
            }
        }
    }
    Ok(schemes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_services_and_use_cases() {
        let services = SchemeParser::new()
            .parse_str(
                r#"{
                    "services": [{"name": "Orders"}, {"name": "Idle"}, {"id": 3}],
                    "useCaseResponsibility": {"Orders": ["CreateOrder", "GetOrder"]}
                }"#,
            )
            .unwrap();

        assert_eq!(services.len(), 2);
        assert_eq!(services[0].use_cases, vec!["CreateOrder", "GetOrder"]);
        assert!(services[1].use_cases.is_empty());
    }

    #[test]
    fn test_missing_responsibility_map() {
        let services = SchemeParser::new()
            .parse_str(r#"{"services": [{"name": "Orders"}]}"#)
            .unwrap();
        assert!(services[0].use_cases.is_empty());
    }

    #[test]
    fn test_missing_services_key() {
        let err = SchemeParser::new()
            .parse_str(r#"{"useCaseResponsibility": {}}"#)
            .unwrap_err();
        assert!(matches!(err, ParseError::MissingField(ref f) if f == "services"));
    }

    #[test]
    fn test_directory_is_sorted_and_bad_files_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b_split.json"), r#"{"services": [{"name": "A"}]}"#).unwrap();
        fs::write(dir.path().join("a_mono.json"), r#"{"services": [{"name": "M"}]}"#).unwrap();
        fs::write(dir.path().join("broken.json"), "{oops").unwrap();
        fs::write(dir.path().join("no_services.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let schemes = parse_schemes_dir(dir.path()).unwrap();
        let names: Vec<&str> = schemes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a_mono", "b_split"]);
    }

    #[test]
    fn test_empty_directory_yields_no_schemes() {
        let dir = tempfile::tempdir().unwrap();
        assert!(parse_schemes_dir(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let err = parse_schemes_dir(Path::new("/no/such/schemes")).unwrap_err();
        assert!(matches!(err, ParseError::NotADirectory(_)));
    }
}
