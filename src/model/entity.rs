//! Entity catalogue.

use super::AttributeId;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Declared entity: a name plus its fine-grained attribute names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDefinition {
    pub name: String,
    #[serde(rename = "nanoentities")]
    pub attributes: Vec<String>,
}

impl EntityDefinition {
    pub fn new<I, S>(name: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Mapping from entity name to the ordered attribute identifiers it owns.
///
/// Identifiers are unique across the whole catalogue: attribute names are
/// de-duplicated per entity, and a re-declared entity replaces the earlier
/// declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCatalogue {
    entities: IndexMap<String, Vec<AttributeId>>,
}

impl EntityCatalogue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalogue from entity declarations, in declaration order.
    #[must_use]
    pub fn from_definitions(definitions: impl IntoIterator<Item = EntityDefinition>) -> Self {
        let mut catalogue = Self::new();
        for definition in definitions {
            catalogue.insert(definition);
        }
        catalogue
    }

    /// Add (or replace) one entity.
    pub fn insert(&mut self, definition: EntityDefinition) {
        let mut seen = IndexSet::with_capacity(definition.attributes.len());
        for attribute in &definition.attributes {
            if !seen.insert(attribute.as_str()) {
                tracing::warn!(
                    entity = %definition.name,
                    attribute = %attribute,
                    "Duplicate attribute declaration ignored"
                );
            }
        }
        let ids = seen
            .into_iter()
            .map(|attribute| AttributeId::new(&definition.name, attribute))
            .collect();

        if self.entities.contains_key(&definition.name) {
            tracing::warn!(
                entity = %definition.name,
                "Entity declared more than once; the last declaration wins"
            );
        }
        self.entities.insert(definition.name, ids);
    }

    /// Attribute identifiers of an entity.
    #[must_use]
    pub fn attributes_of(&self, entity: &str) -> Option<&[AttributeId]> {
        self.entities.get(entity).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains_entity(&self, entity: &str) -> bool {
        self.entities.contains_key(entity)
    }

    #[must_use]
    pub fn contains_attribute(&self, id: &AttributeId) -> bool {
        self.attributes_of(id.entity())
            .is_some_and(|attributes| attributes.contains(id))
    }

    /// Iterate `(entity name, attribute ids)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AttributeId])> {
        self.entities
            .iter()
            .map(|(name, ids)| (name.as_str(), ids.as_slice()))
    }

    /// Iterate every attribute identifier in the catalogue.
    pub fn all_attributes(&self) -> impl Iterator<Item = &AttributeId> {
        self.entities.values().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.entities.values().map(Vec::len).sum()
    }
}
