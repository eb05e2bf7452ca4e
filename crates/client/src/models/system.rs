//! Computer system resource: identity, power, boot.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Power state of a computer system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PowerState {
    On,
    Off,
    PoweringOn,
    PoweringOff,
    /// Firmware reported something we do not recognize.
    #[serde(other)]
    #[default]
    Unknown,
}

impl PowerState {
    /// Only a fully powered-on system yields trustworthy inventory data.
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "On"),
            Self::Off => write!(f, "Off"),
            Self::PoweringOn => write!(f, "PoweringOn"),
            Self::PoweringOff => write!(f, "PoweringOff"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Reset action types accepted by `ComputerSystem.Reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetType {
    On,
    ForceOff,
    GracefulShutdown,
    GracefulRestart,
    ForceRestart,
}

/// The `Status` object carried by most Redfish resources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceStatus {
    #[serde(rename = "Health", default)]
    pub health: Option<String>,
    #[serde(rename = "HealthRollup", default)]
    pub health_rollup: Option<String>,
    #[serde(rename = "State", default)]
    pub state: Option<String>,
}

/// Boot source override settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Boot {
    #[serde(rename = "BootSourceOverrideTarget", default)]
    pub target: Option<String>,
    #[serde(rename = "BootSourceOverrideEnabled", default)]
    pub enabled: Option<String>,
    #[serde(rename = "BootSourceOverrideMode", default)]
    pub mode: Option<String>,
}

/// Composite system information for one server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    #[serde(rename = "Id", default)]
    pub id: Option<String>,
    #[serde(rename = "Manufacturer", default)]
    pub manufacturer: Option<String>,
    #[serde(rename = "Model", default)]
    pub model: Option<String>,
    #[serde(rename = "SerialNumber", default)]
    pub serial_number: Option<String>,
    #[serde(rename = "SKU", default)]
    pub sku: Option<String>,
    #[serde(rename = "BiosVersion", default)]
    pub bios_version: Option<String>,
    #[serde(rename = "PowerState", default)]
    pub power_state: PowerState,
    #[serde(rename = "Status", default)]
    pub status: ResourceStatus,
    #[serde(rename = "Boot", default)]
    pub boot: Boot,
}
