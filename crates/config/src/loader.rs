//! Fleet configuration loading and merging.
//!
//! Responsibilities:
//! - Resolve the config file path: explicit path > `REDFISHCTL_CONFIG` env
//!   var > `~/.redfishctl/config.yaml`.
//! - Parse the YAML fleet file.
//! - Fill missing per-server credentials from `BMC_USERNAME`/`BMC_PASSWORD`
//!   environment variables, then from CLI-provided fallbacks.
//! - Synthesize a single-server fleet from CLI flags when no file exists.
//!
//! Invariants:
//! - Environment variables beat CLI fallbacks for credentials, matching the
//!   original tool's precedence.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - An empty server list after merging is an error, not an empty run.

use secrecy::SecretString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::types::{FleetConfig, ServerEntry};

const CONFIG_PATH_ENV: &str = "REDFISHCTL_CONFIG";
const USERNAME_ENV: &str = "BMC_USERNAME";
const PASSWORD_ENV: &str = "BMC_PASSWORD";

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. The returned value is trimmed.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Builder that assembles the effective fleet configuration.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    vendor: Option<String>,
    hostname: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file if one is present. Missing files are fine; any
    /// other I/O error is surfaced.
    pub fn load_dotenv(&self) -> Result<(), ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => {
                debug!("Loaded environment from {}", path.display());
                Ok(())
            }
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::InvalidValue {
                var: ".env".to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Explicit config file path (highest priority).
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Vendor tag fallback used when synthesizing a single-server fleet.
    pub fn with_vendor(mut self, vendor: Option<String>) -> Self {
        self.vendor = vendor;
        self
    }

    /// Hostname fallback used when no config file lists any servers.
    pub fn with_hostname(mut self, hostname: Option<String>) -> Self {
        self.hostname = hostname;
        self
    }

    /// Username fallback for servers that omit one.
    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    /// Password fallback for servers that omit one.
    pub fn with_password(mut self, password: Option<SecretString>) -> Self {
        self.password = password;
        self
    }

    /// The path the user asked for, via flag or `REDFISHCTL_CONFIG`. Both
    /// name a specific file, so a miss on either is an error rather than a
    /// fallthrough.
    fn explicit_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(|| env_var_or_none(CONFIG_PATH_ENV).map(PathBuf::from))
    }

    fn default_path() -> Option<PathBuf> {
        directories::UserDirs::new()
            .map(|dirs| dirs.home_dir().join(".redfishctl").join("config.yaml"))
    }

    /// Load the fleet configuration and merge credential fallbacks.
    ///
    /// When a path was given via flag or env var, a missing or unreadable
    /// file is an error. The default path is probed opportunistically: if
    /// nothing is there, the fleet is built from CLI flags alone.
    pub fn load(self) -> Result<FleetConfig, ConfigError> {
        let mut cfg = match self.explicit_path() {
            Some(path) if path.exists() => Self::read_file(&path)?,
            Some(path) => {
                return Err(ConfigError::Io {
                    path,
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "config file not found",
                    ),
                });
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read_file(&path)?,
                _ => FleetConfig::default(),
            },
        };

        let env_username = env_var_or_none(USERNAME_ENV);
        let env_password = env_var_or_none(PASSWORD_ENV).map(|p| SecretString::new(p.into()));

        // Fill per-server credential gaps: env beats CLI fallback.
        for server in &mut cfg.servers {
            if server.username.is_none() {
                server.username = env_username.clone().or_else(|| self.username.clone());
            }
            if server.password.is_none() {
                server.password = env_password.clone().or_else(|| self.password.clone());
            }
        }

        // No file (or an empty one): a single server from CLI flags.
        if cfg.servers.is_empty() {
            if let Some(hostname) = self.hostname.clone() {
                cfg.servers.push(ServerEntry {
                    vendor: self.vendor.clone().unwrap_or_else(|| "idrac".to_string()),
                    hostname,
                    username: env_username.or(self.username),
                    password: env_password.or(self.password),
                });
            }
        }

        if cfg.servers.is_empty() {
            return Err(ConfigError::NoServers);
        }

        Ok(cfg)
    }

    fn read_file(path: &Path) -> Result<FleetConfig, ConfigError> {
        info!("Loading fleet configuration from {}", path.display());
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
