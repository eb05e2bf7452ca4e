//! `redfishctl boot` - next-boot device override.

use anyhow::Result;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use redfish_client::ClientRegistry;

use crate::args::{BootCommand, Cli};
use crate::commands::{action_exit_code, load_fleet};
use crate::error::ExitCode;
use crate::format::OutputFormat;

pub async fn run(
    cli: &Cli,
    registry: &Arc<ClientRegistry>,
    command: &BootCommand,
) -> Result<ExitCode> {
    match command {
        BootCommand::Get => get(cli, registry).await,
        BootCommand::Set { device } => set(cli, registry, device).await,
    }
}

async fn get(cli: &Cli, registry: &Arc<ClientRegistry>) -> Result<ExitCode> {
    let format: OutputFormat = cli.output.parse()?;
    let fleet = load_fleet(cli)?;

    let mut rows = Vec::new();
    let mut failed = 0;
    for server in &fleet.servers {
        let result = match registry.resolve(server, &fleet.settings) {
            Ok(client) => client.boot_info().await,
            Err(e) => Err(e),
        };
        match result {
            Ok(boot) => rows.push(json!({
                "hostname": server.hostname,
                "target": boot.target,
                "enabled": boot.enabled,
                "mode": boot.mode,
            })),
            Err(e) => {
                eprintln!("{}: {}: {}", server.hostname, e.kind(), e);
                failed += 1;
            }
        }
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "servers": rows }))?)
        }
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&json!({ "servers": rows }))?),
        OutputFormat::Table => {
            for row in &rows {
                println!(
                    "{}: target={} enabled={} mode={}",
                    row["hostname"].as_str().unwrap_or("-"),
                    row["target"].as_str().unwrap_or("-"),
                    row["enabled"].as_str().unwrap_or("-"),
                    row["mode"].as_str().unwrap_or("-"),
                );
            }
        }
    }

    Ok(action_exit_code(rows.len(), failed))
}

async fn set(cli: &Cli, registry: &Arc<ClientRegistry>, device: &str) -> Result<ExitCode> {
    let fleet = load_fleet(cli)?;

    let mut succeeded = 0;
    let mut failed = 0;
    for server in &fleet.servers {
        let result = match registry.resolve(server, &fleet.settings) {
            Ok(client) => client.set_boot_device(device).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                info!(host = %server.hostname, device, "boot override set");
                println!("{}: next boot set to {device}", server.hostname);
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
