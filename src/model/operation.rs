//! Operations (use cases), their types and type weights.

use super::AttributeId;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A named unit of business behaviour and the attributes it touches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    /// Attributes the operation consumes
    pub read: IndexSet<AttributeId>,
    /// Attributes the operation mutates
    pub write: IndexSet<AttributeId>,
}

impl Operation {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper adding read accesses.
    #[must_use]
    pub fn reads<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = AttributeId>,
    {
        self.read.extend(ids);
        self
    }

    /// Builder-style helper adding write accesses.
    #[must_use]
    pub fn writes<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = AttributeId>,
    {
        self.write.extend(ids);
        self
    }

    /// Every attribute touched, reads first.
    pub fn accessed(&self) -> impl Iterator<Item = &AttributeId> {
        self.read.iter().chain(self.write.iter())
    }

    #[must_use]
    pub fn has_accesses(&self) -> bool {
        !self.read.is_empty() || !self.write.is_empty()
    }
}

/// All known operations, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationCatalogue {
    operations: IndexMap<String, Operation>,
}

impl OperationCatalogue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an operation. A repeated name keeps its original
    /// position but takes the later definition's accesses.
    pub fn insert(&mut self, operation: Operation) {
        if self.operations.contains_key(&operation.name) {
            tracing::warn!(
                operation = %operation.name,
                "Operation defined more than once; the last definition wins"
            );
        }
        self.operations.insert(operation.name.clone(), operation);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.operations.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl FromIterator<Operation> for OperationCatalogue {
    fn from_iter<T: IntoIterator<Item = Operation>>(iter: T) -> Self {
        let mut catalogue = Self::new();
        for operation in iter {
            catalogue.insert(operation);
        }
        catalogue
    }
}

/// Business classification of an operation.
///
/// The four CRUD kinds are built in; any other name is kept verbatim so that
/// custom kinds can be weighted through configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OperationType {
    Create,
    Update,
    Delete,
    #[default]
    Read,
    Custom(String),
}

impl OperationType {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Delete => "Delete",
            Self::Read => "Read",
            Self::Custom(name) => name,
        }
    }
}

impl FromStr for OperationType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Create" => Self::Create,
            "Update" => Self::Update,
            "Delete" => Self::Delete,
            "Read" => Self::Read,
            other => Self::Custom(other.to_string()),
        })
    }
}

impl From<String> for OperationType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for OperationType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<OperationType> for String {
    fn from(value: OperationType) -> Self {
        match value {
            OperationType::Custom(name) => name,
            builtin => builtin.name().to_string(),
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer weight per operation type. Weights may be negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationWeights(IndexMap<OperationType, i64>);

impl OperationWeights {
    /// Empty table: every lookup misses.
    #[must_use]
    pub fn empty() -> Self {
        Self(IndexMap::new())
    }

    #[must_use]
    pub fn with(mut self, kind: impl Into<OperationType>, weight: i64) -> Self {
        self.0.insert(kind.into(), weight);
        self
    }

    pub fn set(&mut self, kind: impl Into<OperationType>, weight: i64) {
        self.0.insert(kind.into(), weight);
    }

    #[must_use]
    pub fn get(&self, kind: &OperationType) -> Option<i64> {
        self.0.get(kind).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OperationType, i64)> {
        self.0.iter().map(|(kind, weight)| (kind, *weight))
    }
}

impl Default for OperationWeights {
    /// Create=4, Update=3, Delete=2, Read=1.
    fn default() -> Self {
        Self::empty()
            .with(OperationType::Create, 4)
            .with(OperationType::Update, 3)
            .with(OperationType::Delete, 2)
            .with(OperationType::Read, 1)
    }
}

impl<K: Into<OperationType>> FromIterator<(K, i64)> for OperationWeights {
    fn from_iter<T: IntoIterator<Item = (K, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, w)| (k.into(), w)).collect())
    }
}
