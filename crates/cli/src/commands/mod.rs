//! Command implementations.
//!
//! Fleet read commands (sysinfo, storage, eventlog, power status) fan out
//! through the aggregation engine. State-changing commands (power on/off/
//! reboot, boot set) run sequentially per server so a half-applied fleet
//! action is at least applied in a predictable order.

pub mod boot;
pub mod controllers;
pub mod eventlog;
pub mod power;
pub mod raid;
pub mod sysinfo;
pub mod vendors;

use anyhow::{Context, Result, bail};
use secrecy::SecretString;
use std::time::Duration;

use redfish_client::{ConnectionSettings, ServerDescriptor};
use redfish_config::ConfigLoader;

use crate::args::Cli;
use crate::error::ExitCode;

/// The resolved fleet for this invocation: who to talk to and how.
pub struct Fleet {
    pub servers: Vec<ServerDescriptor>,
    pub settings: ConnectionSettings,
}

/// Load the fleet configuration and turn it into connectable descriptors.
///
/// Servers missing credentials after the env/CLI merge are a configuration
/// error up front, not a per-server authentication failure later.
pub fn load_fleet(cli: &Cli) -> Result<Fleet> {
    let config = ConfigLoader::new()
        .with_config_path(cli.config.clone())
        .with_vendor(Some(cli.vendor.clone()))
        .with_hostname(cli.host.clone())
        .with_username(cli.username.clone())
        .with_password(
            cli.password
                .clone()
                .map(|p| SecretString::new(p.into())),
        )
        .load()
        .context("failed to load fleet configuration")?;

    let mut servers = Vec::with_capacity(config.servers.len());
    for entry in config.servers {
        let (Some(username), Some(password)) = (entry.username, entry.password) else {
            bail!(
                "no credentials for {}: set BMC_USERNAME/BMC_PASSWORD, \
                 --username/--password, or per-server values in the fleet file",
                entry.hostname
            );
        };
        servers.push(ServerDescriptor {
            vendor: entry.vendor,
            hostname: entry.hostname,
            username,
            password,
        });
    }

    let settings = ConnectionSettings {
        timeout: cli
            .timeout
            .map(Duration::from_secs)
            .unwrap_or_else(|| config.defaults.timeout()),
        verify_tls: cli.verify_tls || config.defaults.verify_tls,
    };

    Ok(Fleet { servers, settings })
}

/// Exit code for a sequential per-server action run.
pub fn action_exit_code(succeeded: usize, failed: usize) -> ExitCode {
    if failed == 0 {
        ExitCode::Success
    } else if succeeded == 0 {
        ExitCode::TotalFailure
    } else {
        ExitCode::PartialFailure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_exit_codes() {
        assert_eq!(action_exit_code(2, 0), ExitCode::Success);
        assert_eq!(action_exit_code(1, 1), ExitCode::PartialFailure);
        assert_eq!(action_exit_code(0, 2), ExitCode::TotalFailure);
    }
}
