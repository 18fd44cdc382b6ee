//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod calculate;
mod validate;

pub use calculate::run_calculate;
pub use validate::run_validate;

// Re-export config types used by handlers
pub use crate::config::AppConfig;
