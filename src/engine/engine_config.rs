//! Configuration types for the metrics engine.

use crate::model::{OperationType, OperationWeights};
use clap::ValueEnum;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Weight used when an operation's type has no entry in the weight table.
pub const DEFAULT_FALLBACK_WEIGHT: i64 = 1;

/// Denominator used for the scheme-level averages (ALCOM, ASGM).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum AveragingPolicy {
    /// Divide by every declared service, including ones skipped for having
    /// no use cases
    #[default]
    Declared,
    /// Divide only by services that produced metrics
    Processed,
}

impl AveragingPolicy {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Declared => "declared",
            Self::Processed => "processed",
        }
    }

    /// Pick the averaging denominator.
    #[must_use]
    pub const fn denominator(&self, declared: usize, processed: usize) -> usize {
        match self {
            Self::Declared => declared,
            Self::Processed => processed,
        }
    }
}

impl std::fmt::Display for AveragingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the engine needs besides the domain model itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Integer weight per operation type
    pub weights: OperationWeights,
    /// Operation name → type; unmapped operations use `default_type`
    pub type_map: IndexMap<String, OperationType>,
    /// Type assumed for operations missing from `type_map`
    pub default_type: OperationType,
    /// Weight for types missing from `weights`
    pub fallback_weight: i64,
    /// Denominator for scheme averages
    pub averaging: AveragingPolicy,
    /// Process schemes on the rayon thread pool
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: OperationWeights::default(),
            type_map: IndexMap::new(),
            default_type: OperationType::Read,
            fallback_weight: DEFAULT_FALLBACK_WEIGHT,
            averaging: AveragingPolicy::default(),
            parallel: false,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the weight table.
    #[must_use]
    pub fn with_weights(mut self, weights: OperationWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replace the operation → type map.
    #[must_use]
    pub fn with_type_map<I, K, V>(mut self, type_map: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OperationType>,
    {
        self.type_map = type_map
            .into_iter()
            .map(|(name, kind)| (name.into(), kind.into()))
            .collect();
        self
    }

    #[must_use]
    pub fn with_default_type(mut self, kind: impl Into<OperationType>) -> Self {
        self.default_type = kind.into();
        self
    }

    #[must_use]
    pub const fn with_fallback_weight(mut self, weight: i64) -> Self {
        self.fallback_weight = weight;
        self
    }

    #[must_use]
    pub const fn with_averaging(mut self, averaging: AveragingPolicy) -> Self {
        self.averaging = averaging;
        self
    }

    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Type of an operation, falling back to the default type.
    #[must_use]
    pub fn operation_type(&self, operation: &str) -> &OperationType {
        self.type_map.get(operation).unwrap_or(&self.default_type)
    }

    /// OT: the weight of an operation's type.
    #[must_use]
    pub fn operation_weight(&self, operation: &str) -> i64 {
        self.weights
            .get(self.operation_type(operation))
            .unwrap_or(self.fallback_weight)
    }
}
