//! Vendor-neutral Redfish BMC client and fleet aggregation engine.
//!
//! This crate provides a capability trait for out-of-band management
//! controllers ([`BmcClient`]), dialect implementations for Dell iDRAC and
//! Lenovo XClarity, a runtime [`ClientRegistry`] mapping vendor tags to
//! client constructors, and the fan-out/fan-in [`aggregate`] coordinator
//! that queries a whole fleet concurrently while isolating per-server
//! failures.

pub mod aggregate;
pub mod assemble;
mod client;
pub mod error;
pub mod models;
pub mod registry;
pub mod transport;
pub mod vendors;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use aggregate::{AggregateOutcome, ServerError, aggregate};
pub use assemble::assemble_report;
pub use client::BmcClient;
pub use error::{ClientError, Result};
pub use models::{
    Boot, ControllerHealth, ControllerInventory, Drive, EventLogEntry, ODataRef, PowerState,
    ReportBody, ReportKind, ResetType, ResourceStatus, ServerReport, SystemInfo,
};
pub use registry::{ClientRegistry, ConnectionSettings, ServerDescriptor};
pub use transport::Transport;
