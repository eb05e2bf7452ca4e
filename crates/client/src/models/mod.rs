//! Vendor-neutral data models for Redfish resources.
//!
//! Field shapes follow the DMTF Redfish schemas as the iDRAC and XClarity
//! dialects actually serve them; everything a caller sees is already
//! normalized away from vendor specifics.

mod events;
mod report;
mod storage;
mod system;

pub use events::{EventLog, EventLogEntry};
pub use report::{ControllerHealth, ReportBody, ReportKind, ServerReport};
pub use storage::{ControllerInventory, Drive, ODataRef, ResourceCollection};
pub use system::{Boot, PowerState, ResetType, ResourceStatus, SystemInfo};
