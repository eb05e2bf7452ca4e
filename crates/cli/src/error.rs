//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   usage errors from per-server failures.
//! - Derive the fleet exit code from an aggregation outcome.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use redfish_client::AggregateOutcome;

/// Structured exit codes for redfishctl.
///
/// Fleet commands report degraded runs through the exit code so cron jobs
/// and monitoring wrappers can distinguish "some BMCs were unreachable"
/// from "nothing worked at all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every server produced a report (or the command needed none).
    Success = 0,

    /// Usage or configuration error; nothing was attempted.
    GeneralError = 1,

    /// Some servers failed, some succeeded. Output still contains every
    /// successful report.
    PartialFailure = 2,

    /// Every server failed; no report was produced.
    TotalFailure = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Derive the exit code from a joined aggregation outcome.
    pub fn from_outcome(outcome: &AggregateOutcome) -> Self {
        if outcome.all_failed() {
            ExitCode::TotalFailure
        } else if outcome.has_errors() {
            ExitCode::PartialFailure
        } else {
            ExitCode::Success
        }
    }
}
