//! Vendor-specific Redfish dialects.
//!
//! Each module implements [`crate::BmcClient`] for one BMC family by
//! mapping the abstract operations onto that family's URL shapes. New
//! vendors plug in by registering a constructor; neither the coordinator
//! nor the assembler changes.

pub mod idrac;
pub mod xclarity;

use std::sync::Arc;

use crate::client::BmcClient;
use crate::registry::ClientRegistry;

/// Register the built-in vendor dialects.
pub fn register_builtin(registry: &ClientRegistry) {
    registry.register(
        idrac::VENDOR_TAG,
        Arc::new(|server, settings| {
            Ok(Arc::new(idrac::IdracClient::new(server, settings)?) as Arc<dyn BmcClient>)
        }),
    );
    registry.register(
        xclarity::VENDOR_TAG,
        Arc::new(|server, settings| {
            Ok(Arc::new(xclarity::XClarityClient::new(server, settings)?) as Arc<dyn BmcClient>)
        }),
    );
}
