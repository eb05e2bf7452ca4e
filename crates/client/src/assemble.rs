//! Per-server report assembly.
//!
//! A strictly sequential pipeline running inside one worker: no internal
//! concurrency, no retries, no branching back. Any step failure is terminal
//! for this server's report; partial state gathered before the failure is
//! discarded rather than returned, so a report is either complete or absent.

use tracing::debug;

use crate::client::BmcClient;
use crate::error::{ClientError, Result};
use crate::models::{ControllerHealth, ControllerInventory, ReportBody, ReportKind, ServerReport};

/// Assemble one report of the requested kind for one server.
pub async fn assemble_report(client: &dyn BmcClient, kind: ReportKind) -> Result<ServerReport> {
    let body = match kind {
        ReportKind::System => {
            let system = client.system_info().await?;
            ReportBody::System { system }
        }
        ReportKind::EventLog => {
            let events = client.event_log().await?;
            ReportBody::EventLog { events }
        }
        ReportKind::Controllers => {
            let controllers = controller_inventories(client).await?;
            ReportBody::Controllers { controllers }
        }
        ReportKind::StorageHealth { include_drives } => {
            let controllers = assemble_storage_health(client, include_drives).await?;
            ReportBody::StorageHealth { controllers }
        }
    };

    Ok(ServerReport {
        hostname: client.hostname().to_string(),
        body,
    })
}

/// Power check, controller list, per-controller detail.
///
/// The power check comes first because a powered-off system serves empty or
/// garbage controller data that would be indistinguishable from a healthy
/// empty inventory.
async fn controller_inventories(client: &dyn BmcClient) -> Result<Vec<ControllerInventory>> {
    let system = client.system_info().await?;
    if !system.power_state.is_on() {
        return Err(ClientError::NotPoweredOn {
            host: client.hostname().to_string(),
            state: system.power_state.to_string(),
        });
    }

    let refs = client.storage_controllers().await?;
    debug!(
        host = client.hostname(),
        controllers = refs.len(),
        "fetched controller references"
    );

    let mut inventories = Vec::with_capacity(refs.len());
    for controller_ref in &refs {
        inventories.push(client.controller_inventory(&controller_ref.odata_id).await?);
    }
    Ok(inventories)
}

/// The health pipeline: the inventory walk plus optional per-drive detail,
/// projected into health summaries.
async fn assemble_storage_health(
    client: &dyn BmcClient,
    include_drives: bool,
) -> Result<Vec<ControllerHealth>> {
    let inventories = controller_inventories(client).await?;

    let mut controllers = Vec::with_capacity(inventories.len());
    for inventory in inventories {
        let mut drives = Vec::new();
        if include_drives {
            for drive_ref in &inventory.drives {
                drives.push(client.drive(&drive_ref.odata_id).await?);
            }
        }

        controllers.push(ControllerHealth {
            drives_count: inventory.drives_count.unwrap_or(inventory.drives.len() as u32),
            id: inventory.id,
            name: inventory.name,
            health_status: inventory.status.health,
            state: inventory.status.state,
            drives,
        });
    }

    Ok(controllers)
}
