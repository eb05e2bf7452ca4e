//! Fan-out/fan-in aggregation across a fleet of servers.
//!
//! Responsibilities:
//! - Spawn one worker task per server, all launched before any is awaited.
//! - Resolve the vendor client inside the worker so a registry miss is just
//!   another per-server error.
//! - Join every worker, collect exactly one outcome per server, and return
//!   reports and errors sorted by hostname.
//!
//! Invariants:
//! - A failing server never prevents other servers' reports from being
//!   returned; there is no cross-worker cancellation.
//! - Workers share nothing mutable; the registry is only read during
//!   fan-out and no lock is held across a network call.
//! - For a fixed set of servers and fixed responses the returned sets are
//!   identical across runs even though completion order varies.

use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::assemble::assemble_report;
use crate::error::ClientError;
use crate::models::{ReportKind, ServerReport};
use crate::registry::{ClientRegistry, ConnectionSettings, ServerDescriptor};

/// A per-server failure, attached to its originating server.
#[derive(Debug)]
pub struct ServerError {
    pub hostname: String,
    pub error: ClientError,
}

impl ServerError {
    /// Machine-readable error classification.
    pub fn kind(&self) -> &'static str {
        self.error.kind()
    }
}

impl Serialize for ServerError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("ServerError", 3)?;
        record.serialize_field("hostname", &self.hostname)?;
        record.serialize_field("kind", self.kind())?;
        record.serialize_field("error", &self.error.to_string())?;
        record.end()
    }
}

/// The joined outcome of one aggregation run: every server contributed
/// exactly one report or one error.
#[derive(Debug, Default, Serialize)]
pub struct AggregateOutcome {
    pub reports: Vec<ServerReport>,
    pub errors: Vec<ServerError>,
}

impl AggregateOutcome {
    /// True when at least one server failed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True when no server produced a report.
    pub fn all_failed(&self) -> bool {
        self.reports.is_empty() && !self.errors.is_empty()
    }
}

/// Query every server concurrently and assemble one report per server.
///
/// Duplicate hostnames are treated as independent servers: two workers, two
/// outcomes. An empty input returns an empty outcome without spawning
/// anything.
pub async fn aggregate(
    registry: &Arc<ClientRegistry>,
    servers: Vec<ServerDescriptor>,
    kind: ReportKind,
    settings: ConnectionSettings,
) -> AggregateOutcome {
    let mut handles = Vec::with_capacity(servers.len());

    for server in servers {
        let registry = Arc::clone(registry);
        handles.push(tokio::spawn(async move {
            run_worker(&registry, server, kind, settings).await
        }));
    }

    let mut outcome = AggregateOutcome::default();
    for result in futures::future::join_all(handles).await {
        match result {
            Ok(Ok(report)) => outcome.reports.push(report),
            Ok(Err(error)) => {
                warn!(host = %error.hostname, kind = error.kind(), "server failed: {}", error.error);
                outcome.errors.push(error);
            }
            // A panicking worker must not poison the barrier; surface it as
            // a decode-style internal error without a hostname to lose.
            Err(join_error) => {
                warn!("worker panicked: {join_error}");
                outcome.errors.push(ServerError {
                    hostname: String::new(),
                    error: ClientError::Decode {
                        url: String::new(),
                        message: format!("worker panicked: {join_error}"),
                    },
                });
            }
        }
    }

    // Completion order is scheduling noise; normalize so output is
    // reproducible and testable.
    outcome.reports.sort_by(|a, b| a.hostname.cmp(&b.hostname));
    outcome.errors.sort_by(|a, b| a.hostname.cmp(&b.hostname));

    debug!(
        reports = outcome.reports.len(),
        errors = outcome.errors.len(),
        "aggregation complete"
    );
    outcome
}

/// One worker: resolve the vendor client, then assemble the report. The
/// outcome is always exactly one report or one error.
async fn run_worker(
    registry: &ClientRegistry,
    server: ServerDescriptor,
    kind: ReportKind,
    settings: ConnectionSettings,
) -> Result<ServerReport, ServerError> {
    let client = registry
        .resolve(&server, &settings)
        .map_err(|error| ServerError {
            hostname: server.hostname.clone(),
            error,
        })?;

    assemble_report(client.as_ref(), kind)
        .await
        .map_err(|error| ServerError {
            hostname: server.hostname.clone(),
            error,
        })
}
