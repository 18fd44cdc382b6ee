//! Unified error types for msmetrics.
//!
//! Each layer (loader, engine, reports, config) has its own error enum; this
//! module folds them into [`MetricsError`] and provides context chaining so
//! that a failure deep in the loader still names the file that triggered it.

use crate::engine::EngineError;
use crate::parsers::ParseError;
use crate::reports::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for msmetrics operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MetricsError {
    /// Errors while loading the domain model
    #[error("Failed to load domain model: {context}")]
    Load {
        context: String,
        #[source]
        source: ParseError,
    },

    /// Errors raised by the metrics engine
    #[error("Metrics calculation failed: {context}")]
    Engine {
        context: String,
        #[source]
        source: EngineError,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenient Result type for msmetrics operations
pub type Result<T> = std::result::Result<T, MetricsError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl MetricsError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: ParseError) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create an engine error with context
    pub fn engine(context: impl Into<String>, source: EngineError) -> Self {
        Self::Engine {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from layer error types
// ============================================================================

impl From<std::io::Error> for MetricsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<ParseError> for MetricsError {
    fn from(err: ParseError) -> Self {
        Self::load(String::new(), err)
    }
}

impl From<EngineError> for MetricsError {
    fn from(err: EngineError) -> Self {
        Self::engine(String::new(), err)
    }
}

impl From<ReportError> for MetricsError {
    fn from(err: ReportError) -> Self {
        Self::report(String::new(), err)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended, so a chain reads outermost first:
///
/// ```ignore
/// use msmetrics::error::ErrorContext;
///
/// let entities = parse_entities_file(&path)
///     .with_context(|| format!("loading entity catalogue {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<MetricsError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: MetricsError, new_ctx: &str) -> MetricsError {
    match err {
        MetricsError::Load {
            context: existing,
            source,
        } => MetricsError::Load {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MetricsError::Engine {
            context: existing,
            source,
        } => MetricsError::Engine {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MetricsError::Report {
            context: existing,
            source,
        } => MetricsError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MetricsError::Io {
            path,
            message,
            source,
        } => MetricsError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        MetricsError::Config(msg) => MetricsError::Config(chain_context(new_ctx, &msg)),
        MetricsError::Validation(msg) => MetricsError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| MetricsError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| MetricsError::Validation(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MetricsError::from(ParseError::MissingField("entities".to_string()));
        let display = err.to_string();
        assert!(
            display.contains("domain model"),
            "Error message should mention the domain model: {}",
            display
        );

        let err = MetricsError::from(EngineError::EmptyScheme);
        assert!(err.to_string().contains("Metrics calculation failed"));
    }

    #[test]
    fn test_error_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = MetricsError::io("/path/to/entities.json", io_err);

        assert!(err.to_string().contains("/path/to/entities.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(MetricsError::load(
                "base",
                ParseError::MissingField("operations".to_string()),
            ))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(MetricsError::Load { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Load error, got {:?}", other),
        }
    }

    #[test]
    fn test_context_on_converted_error() {
        let result: std::result::Result<(), EngineError> = Err(EngineError::EmptyScheme);
        match result.context("scheme 'monolith'") {
            Err(MetricsError::Engine { context, source }) => {
                assert_eq!(context, "scheme 'monolith'");
                assert!(matches!(source, EngineError::EmptyScheme));
            }
            other => panic!("Expected Engine error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(MetricsError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_option_context() {
        let some_value: Option<i32> = Some(42);
        assert_eq!(some_value.context_none("missing value").unwrap(), 42);

        let none_value: Option<i32> = None;
        match none_value.context_none("missing value") {
            Err(MetricsError::Validation(msg)) => assert_eq!(msg, "missing value"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
        assert_eq!(
            chain_context("outer", "middle: inner"),
            "outer: middle: inner"
        );
    }
}
