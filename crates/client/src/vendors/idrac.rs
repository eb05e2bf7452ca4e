//! Dell iDRAC (7 and later) Redfish dialect.
//!
//! iDRAC exposes the managed system at the fixed odata path
//! `/redfish/v1/Systems/System.Embedded.1` and its SEL under the `Sel` log
//! service.

use async_trait::async_trait;

use crate::client::BmcClient;
use crate::error::Result;
use crate::models::{
    Boot, ControllerInventory, Drive, EventLog, EventLogEntry, ODataRef, PowerState, ResetType,
    ResourceCollection, SystemInfo,
};
use crate::registry::{ConnectionSettings, ServerDescriptor};
use crate::transport::Transport;

pub const VENDOR_TAG: &str = "idrac";

const SYSTEM_PATH: &str = "/redfish/v1/Systems/System.Embedded.1";

/// Client for a Dell iDRAC BMC.
#[derive(Debug)]
pub struct IdracClient {
    transport: Transport,
    hostname: String,
}

impl IdracClient {
    pub fn new(server: &ServerDescriptor, settings: &ConnectionSettings) -> Result<Self> {
        let transport = Transport::new(
            &server.hostname,
            server.username.clone(),
            server.password.clone(),
            settings.timeout,
            settings.verify_tls,
        )?;
        Ok(Self {
            transport,
            hostname: server.hostname.clone(),
        })
    }

    /// Build a client over an existing transport; lets tests aim at a mock
    /// server on an ephemeral HTTP port.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_transport(transport: Transport, hostname: String) -> Self {
        Self {
            transport,
            hostname,
        }
    }
}

#[async_trait]
impl BmcClient for IdracClient {
    fn hostname(&self) -> &str {
        &self.hostname
    }

    async fn system_info(&self) -> Result<SystemInfo> {
        self.transport.get_json(SYSTEM_PATH).await
    }

    async fn storage_controllers(&self) -> Result<Vec<ODataRef>> {
        let collection: ResourceCollection = self
            .transport
            .get_json(&format!("{SYSTEM_PATH}/Storage"))
            .await?;
        Ok(collection.members)
    }

    async fn controller_inventory(&self, odata_path: &str) -> Result<ControllerInventory> {
        self.transport.get_json(odata_path).await
    }

    async fn drive(&self, odata_path: &str) -> Result<Drive> {
        self.transport.get_json(odata_path).await
    }

    async fn power_state(&self) -> Result<PowerState> {
        let info = self.system_info().await?;
        Ok(info.power_state)
    }

    async fn set_power_state(&self, reset: ResetType) -> Result<()> {
        self.transport
            .post_json(
                &format!("{SYSTEM_PATH}/Actions/ComputerSystem.Reset"),
                &serde_json::json!({ "ResetType": reset }),
            )
            .await
    }

    async fn boot_info(&self) -> Result<Boot> {
        let info = self.system_info().await?;
        Ok(info.boot)
    }

    async fn set_boot_device(&self, target: &str) -> Result<()> {
        self.transport
            .post_json(
                SYSTEM_PATH,
                &serde_json::json!({ "Boot": { "BootSourceOverrideTarget": target } }),
            )
            .await
    }

    async fn event_log(&self) -> Result<Vec<EventLogEntry>> {
        let log: EventLog = self
            .transport
            .get_json(&format!("{SYSTEM_PATH}/LogServices/Sel/Entries"))
            .await?;
        Ok(log.members)
    }
}
