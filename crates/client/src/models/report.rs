//! Assembled, vendor-neutral per-server reports.

use serde::Serialize;

use super::events::EventLogEntry;
use super::storage::{ControllerInventory, Drive};
use super::system::SystemInfo;

/// Which composite report to assemble for every server in the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Identity, firmware, power, and overall health.
    System,
    /// Raw storage controller inventory detail.
    Controllers,
    /// Storage controller health, optionally including per-drive detail.
    StorageHealth { include_drives: bool },
    /// System event log entries.
    EventLog,
}

/// Health summary for one storage controller.
#[derive(Debug, Clone, Serialize)]
pub struct ControllerHealth {
    pub id: String,
    pub name: String,
    #[serde(rename = "healthstatus")]
    pub health_status: Option<String>,
    pub state: Option<String>,
    pub drives: Vec<Drive>,
    pub drives_count: u32,
}

/// The kind-specific payload of a report.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ReportBody {
    System { system: SystemInfo },
    Controllers { controllers: Vec<ControllerInventory> },
    StorageHealth { controllers: Vec<ControllerHealth> },
    EventLog { events: Vec<EventLogEntry> },
}

/// One complete report for one successfully-processed server.
#[derive(Debug, Clone, Serialize)]
pub struct ServerReport {
    pub hostname: String,
    #[serde(flatten)]
    pub body: ReportBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_report_serializes_hostname_and_controllers() {
        let report = ServerReport {
            hostname: "h1".to_string(),
            body: ReportBody::StorageHealth {
                controllers: vec![ControllerHealth {
                    id: "RAID.Integrated.1-1".to_string(),
                    name: "PERC H740P".to_string(),
                    health_status: Some("OK".to_string()),
                    state: Some("Enabled".to_string()),
                    drives: vec![],
                    drives_count: 0,
                }],
            },
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["hostname"], "h1");
        assert_eq!(json["controllers"][0]["healthstatus"], "OK");
        assert_eq!(json["controllers"][0]["drives_count"], 0);
    }

    #[test]
    fn event_report_serializes_events_array() {
        let report = ServerReport {
            hostname: "h2".to_string(),
            body: ReportBody::EventLog { events: vec![] },
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["events"].as_array().unwrap().is_empty());
    }
}
