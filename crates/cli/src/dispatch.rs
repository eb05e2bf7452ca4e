//! Routes parsed arguments to command implementations.

use anyhow::Result;
use std::sync::Arc;

use redfish_client::ClientRegistry;

use crate::args::{Cli, Commands, RaidCommand, StorageCommand};
use crate::commands;
use crate::error::ExitCode;

pub async fn run_command(cli: &Cli, registry: &Arc<ClientRegistry>) -> Result<ExitCode> {
    match &cli.command {
        Commands::Sysinfo => commands::sysinfo::run(cli, registry).await,
        Commands::Storage {
            command: StorageCommand::Controllers,
        } => commands::controllers::run(cli, registry).await,
        Commands::Storage {
            command: StorageCommand::Raid {
                command: RaidCommand::Health { drives },
            },
        } => commands::raid::health(cli, registry, *drives).await,
        Commands::Eventlog => commands::eventlog::run(cli, registry).await,
        Commands::Power { command } => commands::power::run(cli, registry, command).await,
        Commands::Boot { command } => commands::boot::run(cli, registry, command).await,
        Commands::Vendors => commands::vendors::run(registry),
    }
}
