//! Parser trait definitions and error types.
//!
//! Each input file kind has a parser implementing [`ModelParser`]. Parsers
//! work on raw bytes so that the strict-then-tolerant decoding in
//! [`super::decode`] sees the file exactly as stored.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the domain model
#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("JSON parse error: {0}")]
    JsonError(String),

    #[error("YAML parse error: {0}")]
    YamlError(String),

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Schemes directory not found: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("File is {size_mb} MB, exceeding the {limit_mb} MB limit")]
    TooLarge { size_mb: u64, limit_mb: u64 },

    /// A parse failure attributed to a specific file
    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Attach the file that produced this error.
    #[must_use]
    pub fn in_file(self, path: &Path) -> Self {
        match self {
            already @ Self::InFile { .. } => already,
            other => Self::InFile {
                path: path.to_path_buf(),
                source: Box::new(other),
            },
        }
    }

    /// The error without any file attribution.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::InFile { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<serde_yaml_ng::Error> for ParseError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::YamlError(err.to_string())
    }
}

/// Maximum input file size (64 MB).
pub const MAX_INPUT_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Read a whole input file, refusing oversized ones.
pub fn read_input(path: &Path) -> Result<Vec<u8>, ParseError> {
    if !path.is_file() {
        return Err(ParseError::FileNotFound(path.to_path_buf()));
    }
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_INPUT_FILE_SIZE {
        return Err(ParseError::TooLarge {
            size_mb: metadata.len() / (1024 * 1024),
            limit_mb: MAX_INPUT_FILE_SIZE / (1024 * 1024),
        }
        .in_file(path));
    }
    std::fs::read(path).map_err(|e| ParseError::from(e).in_file(path))
}

/// Trait for domain model file parsers
pub trait ModelParser {
    /// What one input file decodes to
    type Output;

    /// Parse from raw file bytes
    fn parse_bytes(&self, bytes: &[u8]) -> Result<Self::Output, ParseError>;

    /// Parse from string content
    fn parse_str(&self, content: &str) -> Result<Self::Output, ParseError> {
        self.parse_bytes(content.as_bytes())
    }

    /// Parse from a file path; errors name the file
    fn parse(&self, path: &Path) -> Result<Self::Output, ParseError> {
        let bytes = read_input(path)?;
        self.parse_bytes(&bytes).map_err(|e| e.in_file(path))
    }

    /// Human-readable name of the input kind
    fn format_name(&self) -> &str;
}
