//! System event log resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry from a log service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "Created", default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(rename = "EntryType", default)]
    pub entry_type: Option<String>,
    #[serde(rename = "Severity", default)]
    pub severity: Option<String>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}

/// The `Entries` collection of a log service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    #[serde(rename = "Members", default)]
    pub members: Vec<EventLogEntry>,
}
