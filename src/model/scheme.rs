//! Decomposition schemes and their services.

use serde::{Deserialize, Serialize};

/// A named group of operations within one scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    /// Assigned operation names, in declaration order. Repeats are kept.
    pub use_cases: Vec<String>,
}

impl Service {
    pub fn new<I, S>(name: impl Into<String>, use_cases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            use_cases: use_cases.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of assigned operations (NOO).
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.use_cases.len()
    }
}

/// One candidate decomposition of the operation catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    pub name: String,
    pub services: Vec<Service>,
}

impl Scheme {
    pub fn new(name: impl Into<String>, services: Vec<Service>) -> Self {
        Self {
            name: name.into(),
            services,
        }
    }

    #[must_use]
    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    /// Every operation name referenced by any service.
    pub fn use_cases(&self) -> impl Iterator<Item = &str> {
        self.services
            .iter()
            .flat_map(|service| service.use_cases.iter().map(String::as_str))
    }
}
