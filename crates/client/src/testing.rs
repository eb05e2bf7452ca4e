//! Scriptable in-memory BMC for tests.
//!
//! `ScriptedBmc` implements [`BmcClient`] against canned data with
//! per-operation failure injection, so assembler and coordinator tests can
//! exercise every pipeline branch without a network.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use crate::client::BmcClient;
use crate::error::{ClientError, Result};
use crate::models::{
    Boot, ControllerInventory, Drive, EventLogEntry, ODataRef, PowerState, ResetType,
    ResourceStatus, SystemInfo,
};

/// Which operation should fail when invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailOn {
    SystemInfo,
    ControllerList,
    ControllerDetail,
    DriveDetail,
    EventLog,
    PowerAction,
}

/// A canned BMC whose responses are scripted by the test.
#[derive(Debug)]
pub struct ScriptedBmc {
    hostname: String,
    power_state: PowerState,
    controllers: Vec<ControllerInventory>,
    drive_template: Drive,
    events: Vec<EventLogEntry>,
    failures: HashSet<FailOn>,
    resets: Mutex<Vec<ResetType>>,
}

impl ScriptedBmc {
    /// A healthy powered-on server with one OK RAID controller holding one
    /// drive reference.
    pub fn powered_on(hostname: &str) -> Self {
        let controller = ControllerInventory {
            id: "RAID.Integrated.1-1".to_string(),
            name: "PERC H740P".to_string(),
            description: None,
            status: ResourceStatus {
                health: Some("OK".to_string()),
                health_rollup: Some("OK".to_string()),
                state: Some("Enabled".to_string()),
            },
            drives: vec![ODataRef {
                odata_id: format!(
                    "/redfish/v1/Systems/System.Embedded.1/Storage/Drives/Disk.0.{hostname}"
                ),
            }],
            drives_count: Some(1),
        };
        Self {
            hostname: hostname.to_string(),
            power_state: PowerState::On,
            controllers: vec![controller],
            drive_template: Drive {
                id: "Disk.0".to_string(),
                name: "Physical Disk 0:1:0".to_string(),
                model: Some("MZ7LH480".to_string()),
                manufacturer: None,
                serial_number: Some("S0000001".to_string()),
                media_type: Some("SSD".to_string()),
                protocol: Some("SATA".to_string()),
                capacity_bytes: Some(479_559_942_144),
                failure_predicted: Some(false),
                predicted_media_life_left_percent: None,
                rotation_speed_rpm: None,
                status: ResourceStatus {
                    health: Some("OK".to_string()),
                    health_rollup: None,
                    state: Some("Enabled".to_string()),
                },
            },
            events: vec![EventLogEntry {
                id: "1".to_string(),
                created: None,
                entry_type: Some("SEL".to_string()),
                severity: Some("OK".to_string()),
                message: Some("Log cleared.".to_string()),
            }],
            failures: HashSet::new(),
            resets: Mutex::new(Vec::new()),
        }
    }

    /// Like [`Self::powered_on`] but reporting power state Off.
    pub fn powered_off(hostname: &str) -> Self {
        Self {
            power_state: PowerState::Off,
            ..Self::powered_on(hostname)
        }
    }

    pub fn with_power_state(mut self, state: PowerState) -> Self {
        self.power_state = state;
        self
    }

    pub fn with_controllers(mut self, controllers: Vec<ControllerInventory>) -> Self {
        self.controllers = controllers;
        self
    }

    pub fn with_events(mut self, events: Vec<EventLogEntry>) -> Self {
        self.events = events;
        self
    }

    /// Make `op` fail with an injected 500 when invoked.
    pub fn failing(mut self, op: FailOn) -> Self {
        self.failures.insert(op);
        self
    }

    /// Reset actions recorded by [`BmcClient::set_power_state`].
    pub fn recorded_resets(&self) -> Vec<ResetType> {
        self.resets.lock().expect("resets lock poisoned").clone()
    }

    fn injected(&self, op: FailOn, path: &str) -> Result<()> {
        if self.failures.contains(&op) {
            Err(ClientError::Api {
                status: 500,
                url: format!("https://{}{}", self.hostname, path),
                message: "injected failure".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn system(&self) -> SystemInfo {
        SystemInfo {
            id: Some("System.Embedded.1".to_string()),
            manufacturer: Some("Dell Inc.".to_string()),
            model: Some("PowerEdge R640".to_string()),
            serial_number: Some(format!("SN-{}", self.hostname)),
            sku: None,
            bios_version: Some("2.19.1".to_string()),
            power_state: self.power_state,
            status: ResourceStatus {
                health: Some("OK".to_string()),
                health_rollup: None,
                state: Some("Enabled".to_string()),
            },
            boot: Boot::default(),
        }
    }
}

#[async_trait]
impl BmcClient for ScriptedBmc {
    fn hostname(&self) -> &str {
        &self.hostname
    }

    async fn system_info(&self) -> Result<SystemInfo> {
        self.injected(FailOn::SystemInfo, "/redfish/v1/Systems")?;
        Ok(self.system())
    }

    async fn storage_controllers(&self) -> Result<Vec<ODataRef>> {
        self.injected(FailOn::ControllerList, "/redfish/v1/Storage")?;
        Ok(self
            .controllers
            .iter()
            .map(|c| ODataRef {
                odata_id: format!(
                    "/redfish/v1/Systems/System.Embedded.1/Storage/{}",
                    c.id
                ),
            })
            .collect())
    }

    async fn controller_inventory(&self, odata_path: &str) -> Result<ControllerInventory> {
        self.injected(FailOn::ControllerDetail, odata_path)?;
        self.controllers
            .iter()
            .find(|c| odata_path.ends_with(&c.id))
            .cloned()
            .ok_or_else(|| ClientError::NotFound {
                url: format!("https://{}{}", self.hostname, odata_path),
            })
    }

    async fn drive(&self, odata_path: &str) -> Result<Drive> {
        self.injected(FailOn::DriveDetail, odata_path)?;
        Ok(self.drive_template.clone())
    }

    async fn power_state(&self) -> Result<PowerState> {
        Ok(self.power_state)
    }

    async fn set_power_state(&self, reset: ResetType) -> Result<()> {
        self.injected(FailOn::PowerAction, "/redfish/v1/Actions")?;
        self.resets
            .lock()
            .expect("resets lock poisoned")
            .push(reset);
        Ok(())
    }

    async fn boot_info(&self) -> Result<Boot> {
        Ok(Boot {
            target: Some("None".to_string()),
            enabled: Some("Disabled".to_string()),
            mode: Some("UEFI".to_string()),
        })
    }

    async fn set_boot_device(&self, _target: &str) -> Result<()> {
        self.injected(FailOn::PowerAction, "/redfish/v1/Systems")?;
        Ok(())
    }

    async fn event_log(&self) -> Result<Vec<EventLogEntry>> {
        self.injected(FailOn::EventLog, "/redfish/v1/LogServices")?;
        Ok(self.events.clone())
    }
}
