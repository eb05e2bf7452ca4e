//! Storage subsystem resources: collections, controllers, drives.

use serde::{Deserialize, Serialize};

use super::system::ResourceStatus;

/// A reference to another Redfish resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ODataRef {
    #[serde(rename = "@odata.id")]
    pub odata_id: String,
}

/// A Redfish collection: a list of references to its members.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceCollection {
    #[serde(rename = "Members", default)]
    pub members: Vec<ODataRef>,
}

/// Detail for one storage controller, including references to its drives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerInventory {
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: ResourceStatus,
    #[serde(rename = "Drives", default)]
    pub drives: Vec<ODataRef>,
    #[serde(rename = "Drives@odata.count", default)]
    pub drives_count: Option<u32>,
}

/// Detail for one physical drive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drive {
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Model", default)]
    pub model: Option<String>,
    #[serde(rename = "Manufacturer", default)]
    pub manufacturer: Option<String>,
    #[serde(rename = "SerialNumber", default)]
    pub serial_number: Option<String>,
    #[serde(rename = "MediaType", default)]
    pub media_type: Option<String>,
    #[serde(rename = "Protocol", default)]
    pub protocol: Option<String>,
    #[serde(rename = "CapacityBytes", default)]
    pub capacity_bytes: Option<i64>,
    #[serde(rename = "FailurePredicted", default)]
    pub failure_predicted: Option<bool>,
    #[serde(rename = "PredictedMediaLifeLeftPercent", default)]
    pub predicted_media_life_left_percent: Option<f64>,
    #[serde(rename = "RotationSpeedRPM", default)]
    pub rotation_speed_rpm: Option<u32>,
    #[serde(rename = "Status", default)]
    pub status: ResourceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_storage_collection() {
        let body = r#"{
            "Members": [
                {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/Storage/RAID.Integrated.1-1"},
                {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/Storage/AHCI.Embedded.1-1"}
            ]
        }"#;
        let collection: ResourceCollection = serde_json::from_str(body).unwrap();
        assert_eq!(collection.members.len(), 2);
        assert!(collection.members[0].odata_id.ends_with("RAID.Integrated.1-1"));
    }

    #[test]
    fn deserializes_controller_with_drive_refs() {
        let body = r#"{
            "Id": "RAID.Integrated.1-1",
            "Name": "PERC H740P",
            "Status": {"Health": "OK", "State": "Enabled"},
            "Drives": [
                {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/Storage/Drives/Disk.0"}
            ],
            "Drives@odata.count": 1
        }"#;
        let inv: ControllerInventory = serde_json::from_str(body).unwrap();
        assert_eq!(inv.id, "RAID.Integrated.1-1");
        assert_eq!(inv.drives.len(), 1);
        assert_eq!(inv.drives_count, Some(1));
    }

    #[test]
    fn deserializes_drive_detail() {
        let body = r#"{
            "Id": "Disk.0",
            "Name": "Physical Disk 0:1:0",
            "MediaType": "SSD",
            "Protocol": "SATA",
            "CapacityBytes": 479559942144,
            "FailurePredicted": false,
            "Status": {"Health": "OK", "State": "Enabled"}
        }"#;
        let drive: Drive = serde_json::from_str(body).unwrap();
        assert_eq!(drive.media_type.as_deref(), Some("SSD"));
        assert_eq!(drive.capacity_bytes, Some(479_559_942_144));
        assert_eq!(drive.failure_predicted, Some(false));
    }
}
