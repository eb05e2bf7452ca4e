//! The vendor-neutral BMC capability contract.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    Boot, ControllerInventory, Drive, EventLogEntry, ODataRef, PowerState, ResetType, SystemInfo,
};

/// Operations every vendor client must support.
///
/// Implementations are stateless beyond their own connection parameters:
/// no cross-request caching and no shared sockets are required by this
/// contract (an implementation may pool connections internally).
///
/// Multi-step operations (controller inventory, drive detail walks) must
/// abort entirely on any follow-up failure rather than return a partial
/// result; a partial inventory looks complete and is worse than a clear
/// failure.
#[async_trait]
pub trait BmcClient: Send + Sync + std::fmt::Debug {
    /// The hostname this client talks to, used to label reports and errors.
    fn hostname(&self) -> &str;

    /// Fetch composite system information.
    async fn system_info(&self) -> Result<SystemInfo>;

    /// List references to the system's storage controllers.
    async fn storage_controllers(&self) -> Result<Vec<ODataRef>>;

    /// Fetch detail for one storage controller by its odata path.
    async fn controller_inventory(&self, odata_path: &str) -> Result<ControllerInventory>;

    /// Fetch detail for one drive by its odata path.
    async fn drive(&self, odata_path: &str) -> Result<Drive>;

    /// Read the current power state.
    async fn power_state(&self) -> Result<PowerState>;

    /// Issue a `ComputerSystem.Reset` action.
    async fn set_power_state(&self, reset: ResetType) -> Result<()>;

    /// Gracefully restart the server.
    async fn reboot(&self) -> Result<()> {
        self.set_power_state(ResetType::GracefulRestart).await
    }

    /// Read the boot source override settings.
    async fn boot_info(&self) -> Result<Boot>;

    /// Set the next-boot device override (e.g. "Pxe", "Hdd", "BiosSetup").
    async fn set_boot_device(&self, target: &str) -> Result<()>;

    /// Fetch system event log entries.
    async fn event_log(&self) -> Result<Vec<EventLogEntry>>;
}
