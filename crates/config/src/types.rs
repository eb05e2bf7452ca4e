//! Fleet configuration types.
//!
//! Responsibilities:
//! - Define the YAML shape of the fleet file (`servers:` list plus optional
//!   `defaults:` block).
//! - Keep passwords inside `SecretString` so Debug output never leaks them.
//!
//! Does NOT handle:
//! - Locating or reading the file (see `loader`).
//! - Connecting to anything (see the client crate).

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// One managed server as written in the fleet file.
///
/// `username`/`password` may be omitted per server and filled in from the
/// `BMC_USERNAME` / `BMC_PASSWORD` environment variables or CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerEntry {
    /// Vendor tag selecting the client dialect (e.g. "idrac", "xclarity").
    #[serde(rename = "type")]
    pub vendor: String,
    /// Hostname or IP address of the BMC.
    pub hostname: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<SecretString>,
}

/// Connection defaults applied to every server in the fleet.
#[derive(Debug, Clone, Deserialize)]
pub struct Defaults {
    /// Per-request timeout (seconds).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Verify BMC TLS certificates. Off by default: BMCs ship self-signed
    /// certs and the common case is talking to them over a management LAN.
    #[serde(default)]
    pub verify_tls: bool,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            verify_tls: false,
        }
    }
}

impl Defaults {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// The parsed fleet file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FleetConfig {
    #[serde(default)]
    pub servers: Vec<ServerEntry>,
    #[serde(default)]
    pub defaults: Defaults,
}
