//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, reading, or validating the fleet config.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML or has the wrong shape.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// An environment variable or flag carried an unusable value.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// Neither a config file nor enough CLI flags to build a server list.
    #[error("No servers configured: provide a config file or --host/--username/--password")]
    NoServers,
}
