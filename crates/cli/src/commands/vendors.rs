//! `redfishctl vendors` - list registered vendor tags.

use anyhow::Result;
use std::sync::Arc;

use redfish_client::ClientRegistry;

use crate::error::ExitCode;

pub fn run(registry: &Arc<ClientRegistry>) -> Result<ExitCode> {
    for tag in registry.list_tags() {
        println!("{tag}");
    }
    Ok(ExitCode::Success)
}
