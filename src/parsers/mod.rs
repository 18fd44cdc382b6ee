//! Domain model loaders.
//!
//! Three input kinds make up a [`DomainModel`]:
//!
//! - entity catalogue, JSON ([`EntityParser`])
//! - operation catalogue, YAML ([`OperationParser`])
//! - a directory of scheme files, JSON ([`SchemeParser`], [`parse_schemes_dir`])
//!
//! Every file is decoded strictly first and, on failure, once more with a
//! tolerant decoder that strips a byte-order mark and replaces invalid UTF-8.
//!
//! ## Usage
//!
//! ```no_run
//! use msmetrics::parsers::load_domain_model;
//! use std::path::Path;
//!
//! let model = load_domain_model(
//!     Path::new("data/entities.json"),
//!     Path::new("data/operations.yaml"),
//!     Path::new("data/schemes"),
//! )
//! .unwrap();
//! println!("{} schemes", model.schemes.len());
//! ```

pub mod decode;
mod entities;
mod operations;
mod schemes;
mod traits;

pub use entities::EntityParser;
pub use operations::OperationParser;
pub use schemes::{SchemeParser, parse_schemes_dir, scheme_files};
pub use traits::{MAX_INPUT_FILE_SIZE, ModelParser, ParseError, read_input};

use crate::model::{DomainModel, EntityCatalogue, OperationCatalogue};
use std::path::Path;

/// Load the entity catalogue file.
pub fn parse_entities(path: &Path) -> Result<EntityCatalogue, ParseError> {
    tracing::info!("Loading entity file: {}", path.display());
    EntityParser::new().parse(path)
}

/// Load the operations file.
pub fn parse_operations(path: &Path) -> Result<OperationCatalogue, ParseError> {
    tracing::info!("Loading operations file: {}", path.display());
    OperationParser::new().parse(path)
}

/// Load all three inputs into one model.
pub fn load_domain_model(
    entities_file: &Path,
    operations_file: &Path,
    schemes_dir: &Path,
) -> Result<DomainModel, ParseError> {
    let entities = parse_entities(entities_file)?;
    let operations = parse_operations(operations_file)?;
    let schemes = parse_schemes_dir(schemes_dir)?;
    Ok(DomainModel::new(entities, operations, schemes))
}
