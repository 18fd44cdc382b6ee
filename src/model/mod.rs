//! Domain model for decomposition analysis.
//!
//! The loader fills these structures once; the engine only reads them.
//!
//! - [`EntityCatalogue`]: entity name → `Entity.attribute` identifiers
//! - [`OperationCatalogue`]: operation name → read/write attribute sets
//! - [`Scheme`]: a candidate decomposition, a list of [`Service`]s
//! - [`DomainModel`]: all three together

mod attribute;
mod entity;
mod operation;
mod scheme;

pub use attribute::*;
pub use entity::*;
pub use operation::*;
pub use scheme::*;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything the engine needs for one calculation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainModel {
    pub entities: EntityCatalogue,
    pub operations: OperationCatalogue,
    /// Schemes keyed by name, in load order
    pub schemes: IndexMap<String, Scheme>,
}

impl DomainModel {
    #[must_use]
    pub fn new(
        entities: EntityCatalogue,
        operations: OperationCatalogue,
        schemes: impl IntoIterator<Item = Scheme>,
    ) -> Self {
        Self {
            entities,
            operations,
            schemes: schemes
                .into_iter()
                .map(|scheme| (scheme.name.clone(), scheme))
                .collect(),
        }
    }

    /// Cross-reference the three catalogues.
    ///
    /// None of these are fatal: the engine treats dangling references as
    /// missing data. They are surfaced so the caller can log them.
    #[must_use]
    pub fn reference_warnings(&self) -> Vec<ReferenceWarning> {
        let mut warnings = Vec::new();

        for operation in self.operations.iter() {
            for id in operation.accessed() {
                if !self.entities.contains_entity(id.entity()) {
                    warnings.push(ReferenceWarning::UnknownEntity {
                        operation: operation.name.clone(),
                        attribute: id.clone(),
                    });
                } else if !self.entities.contains_attribute(id) {
                    warnings.push(ReferenceWarning::UnknownAttribute {
                        operation: operation.name.clone(),
                        attribute: id.clone(),
                    });
                }
            }
        }

        for scheme in self.schemes.values() {
            for service in &scheme.services {
                for use_case in &service.use_cases {
                    if !self.operations.contains(use_case) {
                        warnings.push(ReferenceWarning::UnknownOperation {
                            scheme: scheme.name.clone(),
                            service: service.name.clone(),
                            operation: use_case.clone(),
                        });
                    }
                }
            }
        }

        warnings
    }
}

/// A dangling reference between catalogues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceWarning {
    /// An operation accesses an attribute of an undeclared entity
    UnknownEntity {
        operation: String,
        attribute: AttributeId,
    },
    /// An operation accesses an undeclared attribute of a declared entity
    UnknownAttribute {
        operation: String,
        attribute: AttributeId,
    },
    /// A service lists an operation with no definition
    UnknownOperation {
        scheme: String,
        service: String,
        operation: String,
    },
}

impl fmt::Display for ReferenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEntity {
                operation,
                attribute,
            } => write!(
                f,
                "operation '{operation}' accesses '{attribute}' but entity '{}' is not declared",
                attribute.entity()
            ),
            Self::UnknownAttribute {
                operation,
                attribute,
            } => write!(
                f,
                "operation '{operation}' accesses undeclared attribute '{attribute}'"
            ),
            Self::UnknownOperation {
                scheme,
                service,
                operation,
            } => write!(
                f,
                "scheme '{scheme}' assigns undefined operation '{operation}' to service '{service}'"
            ),
        }
    }
}
