//! Output rendering for fleet reports.
//!
//! Reports go to stdout in the selected format; per-server error records
//! always go to stderr as `hostname: kind: message` lines so scripts can
//! consume stdout as clean JSON/YAML while still seeing what failed.

use anyhow::{Result, bail};
use std::fmt::Write as _;
use std::str::FromStr;

use redfish_client::{AggregateOutcome, ReportBody, ServerReport};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "table" => Ok(OutputFormat::Table),
            other => bail!("unknown output format '{other}' (expected json, yaml, or table)"),
        }
    }
}

/// Print an aggregation outcome: reports to stdout, error records to stderr.
pub fn print_outcome(format: OutputFormat, outcome: &AggregateOutcome) -> Result<()> {
    print_error_records(outcome);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(outcome)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(outcome)?),
        OutputFormat::Table => print!("{}", render_table(&outcome.reports)),
    }
    Ok(())
}

pub fn print_error_records(outcome: &AggregateOutcome) {
    for err in &outcome.errors {
        eprintln!("{}: {}: {}", err.hostname, err.kind(), err.error);
    }
}

fn render_table(reports: &[ServerReport]) -> String {
    let mut out = String::new();
    for report in reports {
        match &report.body {
            ReportBody::System { system } => {
                let _ = writeln!(
                    out,
                    "{}: {} {} serial={} bios={} power={} health={}",
                    report.hostname,
                    system.manufacturer.as_deref().unwrap_or("-"),
                    system.model.as_deref().unwrap_or("-"),
                    system.serial_number.as_deref().unwrap_or("-"),
                    system.bios_version.as_deref().unwrap_or("-"),
                    system.power_state,
                    system.status.health.as_deref().unwrap_or("-"),
                );
            }
            ReportBody::Controllers { controllers } => {
                for ctrl in controllers {
                    let _ = writeln!(
                        out,
                        "{}: {} ({}) {} state={} drives={}",
                        report.hostname,
                        ctrl.id,
                        ctrl.name,
                        ctrl.description.as_deref().unwrap_or("-"),
                        ctrl.status.state.as_deref().unwrap_or("-"),
                        ctrl.drives_count.unwrap_or(ctrl.drives.len() as u32),
                    );
                }
            }
            ReportBody::StorageHealth { controllers } => {
                for ctrl in controllers {
                    let _ = writeln!(
                        out,
                        "{}: {} ({}) health={} state={} drives={}",
                        report.hostname,
                        ctrl.id,
                        ctrl.name,
                        ctrl.health_status.as_deref().unwrap_or("-"),
                        ctrl.state.as_deref().unwrap_or("-"),
                        ctrl.drives_count,
                    );
                    for drive in &ctrl.drives {
                        let _ = writeln!(
                            out,
                            "{}:   drive {} {} {} {} bytes health={}",
                            report.hostname,
                            drive.id,
                            drive.media_type.as_deref().unwrap_or("-"),
                            drive.protocol.as_deref().unwrap_or("-"),
                            drive
                                .capacity_bytes
                                .map(|b| b.to_string())
                                .unwrap_or_else(|| "-".to_string()),
                            drive.status.health.as_deref().unwrap_or("-"),
                        );
                    }
                }
            }
            ReportBody::EventLog { events } => {
                for event in events {
                    let _ = writeln!(
                        out,
                        "{}: [{}] {} {}",
                        report.hostname,
                        event
                            .created
                            .map(|t| t.to_rfc3339())
                            .unwrap_or_else(|| "-".to_string()),
                        event.severity.as_deref().unwrap_or("-"),
                        event.message.as_deref().unwrap_or("-"),
                    );
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use redfish_client::models::{ControllerHealth, SystemInfo};

    #[test]
    fn parses_format_names() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!(
            "table".parse::<OutputFormat>().unwrap(),
            OutputFormat::Table
        );
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn system_table_has_one_line_per_server() {
        let system: SystemInfo = serde_json::from_str(
            r#"{"Manufacturer": "Dell Inc.", "Model": "PowerEdge R640", "PowerState": "On"}"#,
        )
        .unwrap();
        let reports = vec![ServerReport {
            hostname: "h1".to_string(),
            body: ReportBody::System { system },
        }];
        let table = render_table(&reports);
        assert_eq!(table.lines().count(), 1);
        assert!(table.contains("h1: Dell Inc. PowerEdge R640"));
        assert!(table.contains("power=On"));
    }

    #[test]
    fn controllers_table_shows_inventory_detail() {
        let inventory: redfish_client::ControllerInventory = serde_json::from_str(
            r#"{
                "Id": "RAID.1",
                "Name": "PERC H740P",
                "Description": "Integrated RAID Controller",
                "Status": {"State": "Enabled"},
                "Drives": [{"@odata.id": "/redfish/v1/d0"}],
                "Drives@odata.count": 1
            }"#,
        )
        .unwrap();
        let reports = vec![ServerReport {
            hostname: "h1".to_string(),
            body: ReportBody::Controllers {
                controllers: vec![inventory],
            },
        }];
        let table = render_table(&reports);
        assert_eq!(table.lines().count(), 1);
        assert!(table.contains("RAID.1 (PERC H740P) Integrated RAID Controller"));
        assert!(table.contains("drives=1"));
    }

    #[test]
    fn storage_table_nests_drives_under_controllers() {
        let drive = serde_json::from_str(
            r#"{"Id": "Disk.0", "MediaType": "SSD", "CapacityBytes": 1000, "Status": {"Health": "OK"}}"#,
        )
        .unwrap();
        let reports = vec![ServerReport {
            hostname: "h1".to_string(),
            body: ReportBody::StorageHealth {
                controllers: vec![ControllerHealth {
                    id: "RAID.1".to_string(),
                    name: "PERC".to_string(),
                    health_status: Some("OK".to_string()),
                    state: Some("Enabled".to_string()),
                    drives: vec![drive],
                    drives_count: 1,
                }],
            },
        }];
        let table = render_table(&reports);
        assert_eq!(table.lines().count(), 2);
        assert!(table.contains("RAID.1 (PERC) health=OK"));
        assert!(table.contains("drive Disk.0 SSD"));
    }
}
