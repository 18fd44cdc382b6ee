//! Attribute identifiers (`Entity.attribute`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the entity name and the attribute name.
pub const ATTRIBUTE_SEPARATOR: char = '.';

/// Fully-qualified name of one fine-grained data field.
///
/// Built from an entity name and one of its attribute ("nanoentity") names,
/// e.g. `Order.status`. Two identifiers are equal iff their text is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeId(String);

impl AttributeId {
    /// Create an identifier from an entity name and an attribute name.
    #[must_use]
    pub fn new(entity: &str, attribute: &str) -> Self {
        Self(format!("{entity}{ATTRIBUTE_SEPARATOR}{attribute}"))
    }

    /// Wrap an already-qualified identifier without re-checking its shape.
    #[must_use]
    pub fn from_qualified(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The entity part (text before the first separator).
    #[must_use]
    pub fn entity(&self) -> &str {
        self.0
            .split_once(ATTRIBUTE_SEPARATOR)
            .map_or(self.0.as_str(), |(entity, _)| entity)
    }

    /// The attribute part (text after the first separator), if any.
    #[must_use]
    pub fn attribute(&self) -> Option<&str> {
        self.0
            .split_once(ATTRIBUTE_SEPARATOR)
            .map(|(_, attribute)| attribute)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AttributeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_joins_with_separator() {
        let id = AttributeId::new("Order", "status");
        assert_eq!(id.as_str(), "Order.status");
        assert_eq!(id.entity(), "Order");
        assert_eq!(id.attribute(), Some("status"));
    }

    #[test]
    fn test_attribute_containing_separator() {
        // Only the first separator splits entity from attribute
        let id = AttributeId::new("Cargo", "delivery.eta");
        assert_eq!(id.entity(), "Cargo");
        assert_eq!(id.attribute(), Some("delivery.eta"));
    }

    #[test]
    fn test_unqualified_identifier() {
        let id = AttributeId::from_qualified("orphan");
        assert_eq!(id.entity(), "orphan");
        assert_eq!(id.attribute(), None);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = AttributeId::new("Account", "balance");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"Account.balance\"");
    }
}
