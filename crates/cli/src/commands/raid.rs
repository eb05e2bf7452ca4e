//! `redfishctl storage raid health` - fleet RAID controller health.

use anyhow::Result;
use std::sync::Arc;

use redfish_client::{ClientRegistry, ReportKind, aggregate};

use crate::args::Cli;
use crate::commands::load_fleet;
use crate::error::ExitCode;
use crate::format::{OutputFormat, print_outcome};

pub async fn health(
    cli: &Cli,
    registry: &Arc<ClientRegistry>,
    include_drives: bool,
) -> Result<ExitCode> {
    let format: OutputFormat = cli.output.parse()?;
    let fleet = load_fleet(cli)?;

    let outcome = aggregate(
        registry,
        fleet.servers,
        ReportKind::StorageHealth { include_drives },
        fleet.settings,
    )
    .await;

    print_outcome(format, &outcome)?;
    Ok(ExitCode::from_outcome(&outcome))
}
