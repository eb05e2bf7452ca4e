//! Lenovo XClarity Controller Redfish dialect.
//!
//! XClarity serves the managed system at `/redfish/v1/Systems/1` and keeps
//! its event log under the `StandardLog` log service.

use async_trait::async_trait;

use crate::client::BmcClient;
use crate::error::Result;
use crate::models::{
    Boot, ControllerInventory, Drive, EventLog, EventLogEntry, ODataRef, PowerState, ResetType,
    ResourceCollection, SystemInfo,
};
use crate::registry::{ConnectionSettings, ServerDescriptor};
use crate::transport::Transport;

pub const VENDOR_TAG: &str = "xclarity";

const SYSTEM_PATH: &str = "/redfish/v1/Systems/1";

/// Client for a Lenovo XClarity Controller.
#[derive(Debug)]
pub struct XClarityClient {
    transport: Transport,
    hostname: String,
}

impl XClarityClient {
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

    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_transport(transport: Transport, hostname: String) -> Self {
        Self {
            transport,
            hostname,
        }
    }
}

#[async_trait]
impl BmcClient for XClarityClient {
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
            .get_json(&format!("{SYSTEM_PATH}/LogServices/StandardLog/Entries"))
            .await?;
        Ok(log.members)
    }
}
