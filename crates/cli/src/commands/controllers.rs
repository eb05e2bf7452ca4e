//! `redfishctl storage controllers` - fleet storage controller inventory.

use anyhow::Result;
use std::sync::Arc;

use redfish_client::{ClientRegistry, ReportKind, aggregate};

use crate::args::Cli;
use crate::commands::load_fleet;
use crate::error::ExitCode;
use crate::format::{OutputFormat, print_outcome};

pub async fn run(cli: &Cli, registry: &Arc<ClientRegistry>) -> Result<ExitCode> {
    let format: OutputFormat = cli.output.parse()?;
    let fleet = load_fleet(cli)?;

    let outcome = aggregate(
        registry,
        fleet.servers,
        ReportKind::Controllers,
        fleet.settings,
    )
    .await;

    print_outcome(format, &outcome)?;
    Ok(ExitCode::from_outcome(&outcome))
}
