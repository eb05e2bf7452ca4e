//! Fleet configuration for redfishctl.
//!
//! This crate provides the types and loader for the list of managed BMCs:
//! a YAML fleet file, environment-variable credential overrides, and a
//! single-server fallback assembled from CLI flags.

mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::{ConfigLoader, env_var_or_none};
pub use types::{Defaults, FleetConfig, ServerEntry};
