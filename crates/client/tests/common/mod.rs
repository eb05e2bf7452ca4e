//! Shared wiremock fixtures for vendor client tests.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use redfish_client::Transport;

pub const USERNAME: &str = "root";
pub const PASSWORD: &str = "calvin";

/// Transport aimed at a mock server, carrying the fixture credentials.
pub fn transport_for(server: &MockServer) -> Transport {
    Transport::with_base_url(
        server.uri(),
        USERNAME.to_string(),
        SecretString::new(PASSWORD.to_string().into()),
    )
}

/// Mount a GET mock returning `body` as JSON, requiring basic auth.
pub async fn mount_get(server: &MockServer, url_path: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a GET mock returning the given status with an empty body.
pub async fn mount_get_status(server: &MockServer, url_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// A healthy powered-on ComputerSystem payload rooted at `system_path`.
pub fn system_body(id: &str, power_state: &str) -> Value {
    json!({
        "Id": id,
        "Manufacturer": "Dell Inc.",
        "Model": "PowerEdge R640",
        "SerialNumber": "CN7792174",
        "SKU": "1ABCDE2",
        "BiosVersion": "2.19.1",
        "PowerState": power_state,
        "Status": {"Health": "OK", "HealthRollup": "OK", "State": "Enabled"},
        "Boot": {
            "BootSourceOverrideTarget": "None",
            "BootSourceOverrideEnabled": "Once",
            "BootSourceOverrideMode": "UEFI"
        }
    })
}

/// A Storage collection with one integrated RAID controller.
pub fn storage_collection_body(system_path: &str) -> Value {
    json!({
        "Members": [
            {"@odata.id": format!("{system_path}/Storage/RAID.Integrated.1-1")}
        ]
    })
}

/// Controller detail with one drive reference.
pub fn controller_body(system_path: &str) -> Value {
    json!({
        "Id": "RAID.Integrated.1-1",
        "Name": "PERC H740P Mini",
        "Description": "Integrated RAID Controller",
        "Status": {"Health": "OK", "State": "Enabled"},
        "Drives": [
            {"@odata.id": format!("{system_path}/Storage/RAID.Integrated.1-1/Drives/Disk.0")}
        ],
        "Drives@odata.count": 1
    })
}

/// Physical drive detail.
pub fn drive_body() -> Value {
    json!({
        "Id": "Disk.0",
        "Name": "Physical Disk 0:1:0",
        "Model": "MZ7LH480HAHQ0D3",
        "Manufacturer": "SAMSUNG",
        "SerialNumber": "S45NNE0M800123",
        "MediaType": "SSD",
        "Protocol": "SATA",
        "CapacityBytes": 479_559_942_144i64,
        "FailurePredicted": false,
        "PredictedMediaLifeLeftPercent": 99.0,
        "Status": {"Health": "OK", "State": "Enabled"}
    })
}

/// A two-entry log service Entries collection.
pub fn event_log_body() -> Value {
    json!({
        "Members": [
            {
                "Id": "1",
                "Created": "2026-02-11T08:15:00Z",
                "EntryType": "SEL",
                "Severity": "Critical",
                "Message": "Fault detected on drive 0 in disk drive bay 1."
            },
            {
                "Id": "2",
                "Created": "2026-02-11T08:20:00Z",
                "EntryType": "SEL",
                "Severity": "OK",
                "Message": "Log cleared."
            }
        ]
    })
}
