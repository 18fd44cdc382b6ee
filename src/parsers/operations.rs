//! Operation catalogue parser (YAML).
//!
//! ```yaml
//! operations:
//!   - name: CreateOrder
//!     database_access:
//!       - entity_name: Order
//!         read_attributes: []
//!         write_attributes: [id, status]
//! ```

use super::decode::decode_yaml;
use super::{ModelParser, ParseError};
use crate::model::{AttributeId, Operation, OperationCatalogue};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct OperationsDocument {
    operations: Option<Vec<RawOperation>>,
}

#[derive(Debug, Deserialize)]
struct RawOperation {
    name: Option<String>,
    database_access: Option<Vec<RawAccess>>,
}

#[derive(Debug, Deserialize)]
struct RawAccess {
    entity_name: Option<String>,
    read_attributes: Option<Vec<String>>,
    write_attributes: Option<Vec<String>>,
}

impl RawOperation {
    fn into_operation(self) -> Option<Operation> {
        let Some(name) = self.name else {
            tracing::debug!("Skipping operation without a name");
            return None;
        };

        let mut operation = Operation::new(name);
        for access in self.database_access.unwrap_or_default() {
            let Some(entity) = access.entity_name else {
                tracing::debug!(
                    operation = %operation.name,
                    "Skipping database access without entity_name"
                );
                continue;
            };
            let qualify = |attr: String| AttributeId::new(&entity, &attr);
            operation
                .read
                .extend(access.read_attributes.unwrap_or_default().into_iter().map(qualify));
            operation
                .write
                .extend(access.write_attributes.unwrap_or_default().into_iter().map(qualify));
        }
        Some(operation)
    }
}

/// Parser for the operations file.
#[derive(Debug, Default, Clone, Copy)]
pub struct OperationParser;

impl OperationParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ModelParser for OperationParser {
    type Output = OperationCatalogue;

    fn parse_bytes(&self, bytes: &[u8]) -> Result<OperationCatalogue, ParseError> {
        let document: Option<OperationsDocument> = decode_yaml(bytes)?;
        let raw = document
            .and_then(|d| d.operations)
            .ok_or_else(|| ParseError::MissingField("operations".to_string()))?;

        let catalogue: OperationCatalogue = raw
            .into_iter()
            .filter_map(RawOperation::into_operation)
            .collect();
        tracing::info!("Loaded {} operations", catalogue.len());
        Ok(catalogue)
    }

    fn format_name(&self) -> &str {
        "operations (YAML)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r"
operations:
  - name: CreateOrder
    database_access:
      - entity_name: Order
        write_attributes: [id, status]
      - entity_name: Customer
        read_attributes: [id]
  - name: ListOrders
    database_access:
      - entity_name: Order
        read_attributes: [id, status, id]
  - database_access:
      - entity_name: Order
        read_attributes: [id]
  - name: Ping
";

    #[test]
    fn test_parse_operations() {
        let catalogue = OperationParser::new().parse_str(SAMPLE).unwrap();
        assert_eq!(catalogue.len(), 3);

        let create = catalogue.get("CreateOrder").unwrap();
        assert_eq!(create.write.len(), 2);
        assert!(create.read.contains(&AttributeId::new("Customer", "id")));

        // Repeated attribute collapses into the set
        assert_eq!(catalogue.get("ListOrders").unwrap().read.len(), 2);
        assert!(!catalogue.get("Ping").unwrap().has_accesses());
    }

    #[test]
    fn test_access_without_entity_is_skipped() {
        let yaml = r"
operations:
  - name: Odd
    database_access:
      - read_attributes: [id]
      - entity_name: Order
        read_attributes: [status]
";
        let catalogue = OperationParser::new().parse_str(yaml).unwrap();
        let odd = catalogue.get("Odd").unwrap();
        assert_eq!(odd.read.len(), 1);
        assert!(odd.read.contains(&AttributeId::new("Order", "status")));
    }

    #[test]
    fn test_repeated_operation_replaces_earlier_accesses() {
        let yaml = r"
operations:
  - name: Op
    database_access:
      - entity_name: A
        read_attributes: [x]
  - name: Op
    database_access:
      - entity_name: B
        write_attributes: [y]
";
        let catalogue = OperationParser::new().parse_str(yaml).unwrap();
        assert_eq!(catalogue.len(), 1);
        let op = catalogue.get("Op").unwrap();
        assert!(op.read.is_empty());
        assert_eq!(op.write.len(), 1);
        assert!(op.write.contains(&AttributeId::new("B", "y")));
    }

    #[test]
    fn test_missing_operations_key() {
        let err = OperationParser::new().parse_str("things: []\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingField(ref f) if f == "operations"));
    }

    #[test]
    fn test_empty_document() {
        assert!(OperationParser::new().parse_str("").is_err());
    }
}
