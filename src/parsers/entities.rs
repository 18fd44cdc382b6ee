//! Entity catalogue parser (JSON).
//!
//! ```json
//! {"entities": [{"name": "Order", "nanoentities": ["id", "status"]}]}
//! ```

use super::decode::decode_json;
use super::{ModelParser, ParseError};
use crate::model::{EntityCatalogue, EntityDefinition};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct EntitiesDocument {
    entities: Option<Vec<RawEntity>>,
}

#[derive(Debug, Deserialize)]
struct RawEntity {
    name: Option<String>,
    nanoentities: Option<Vec<String>>,
}

/// Parser for the entity catalogue file.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntityParser;

impl EntityParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ModelParser for EntityParser {
    type Output = EntityCatalogue;

    fn parse_bytes(&self, bytes: &[u8]) -> Result<EntityCatalogue, ParseError> {
        let document: EntitiesDocument = decode_json(bytes)?;
        let raw = document
            .entities
            .ok_or_else(|| ParseError::MissingField("entities".to_string()))?;

        let definitions = raw
            .into_iter()
            .enumerate()
            .map(|(index, entity)| match (entity.name, entity.nanoentities) {
                (Some(name), Some(attributes)) => Ok(EntityDefinition::new(name, attributes)),
                _ => Err(ParseError::InvalidStructure(format!(
                    "Incomplete entity definition at index {index}: 'name' and 'nanoentities' are required"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let catalogue = EntityCatalogue::from_definitions(definitions);
        tracing::info!("Loaded {} entities", catalogue.len());
        Ok(catalogue)
    }

    fn format_name(&self) -> &str {
        "entities (JSON)"
    }
}
