//! `redfishctl power` - fleet power status and control.

use anyhow::Result;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use redfish_client::{ClientRegistry, ReportBody, ReportKind, ResetType, aggregate};

use crate::args::{Cli, PowerCommand};
use crate::commands::{action_exit_code, load_fleet};
use crate::error::ExitCode;
use crate::format::{OutputFormat, print_error_records};

pub async fn run(
    cli: &Cli,
    registry: &Arc<ClientRegistry>,
    command: &PowerCommand,
) -> Result<ExitCode> {
    match command {
        PowerCommand::Status => status(cli, registry).await,
        PowerCommand::On => action(cli, registry, ResetType::On, "power on").await,
        PowerCommand::Off => action(cli, registry, ResetType::ForceOff, "power off").await,
        PowerCommand::Reboot => {
            action(cli, registry, ResetType::GracefulRestart, "reboot").await
        }
    }
}

/// Power status piggybacks on the system report fan-out and projects out
/// just the hostname and power state.
async fn status(cli: &Cli, registry: &Arc<ClientRegistry>) -> Result<ExitCode> {
    let format: OutputFormat = cli.output.parse()?;
    let fleet = load_fleet(cli)?;

    let outcome = aggregate(registry, fleet.servers, ReportKind::System, fleet.settings).await;
    print_error_records(&outcome);

    let rows: Vec<serde_json::Value> = outcome
        .reports
        .iter()
        .filter_map(|report| match &report.body {
            ReportBody::System { system } => Some(json!({
                "hostname": report.hostname,
                "power_state": system.power_state.to_string(),
            })),
            _ => None,
        })
        .collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "servers": rows }))?)
        }
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&json!({ "servers": rows }))?),
        OutputFormat::Table => {
            for row in &rows {
                println!(
                    "{}: {}",
                    row["hostname"].as_str().unwrap_or("-"),
                    row["power_state"].as_str().unwrap_or("-")
                );
            }
        }
    }

    Ok(ExitCode::from_outcome(&outcome))
}

/// Apply a reset action to every server, one at a time. A failing server is
/// reported and skipped; the rest of the fleet still gets the action.
async fn action(
    cli: &Cli,
    registry: &Arc<ClientRegistry>,
    reset: ResetType,
    verb: &str,
) -> Result<ExitCode> {
    let fleet = load_fleet(cli)?;

    let mut succeeded = 0;
    let mut failed = 0;
    for server in &fleet.servers {
        let result = match registry.resolve(server, &fleet.settings) {
            Ok(client) => client.set_power_state(reset).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                info!(host = %server.hostname, "{verb} requested");
                println!("{}: {verb} requested", server.hostname);
                succeeded += 1;
            }
            Err(e) => {
                eprintln!("{}: {}: {}", server.hostname, e.kind(), e);
                failed += 1;
            }
        }
    }

    Ok(action_exit_code(succeeded, failed))
}
