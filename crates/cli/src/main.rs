//! redfishctl - query and manage BMC fleets over Redfish.
//!
//! Responsibilities:
//! - Parse command-line arguments and resolve the fleet configuration.
//! - Execute fleet commands via the shared client library.
//! - Render results and map outcomes to structured exit codes.
//!
//! Does NOT handle:
//! - Redfish protocol details or vendor dialects (see `crates/client`).
//! - Config file parsing and credential merging (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` runs BEFORE config loading so `.env` can provide
//!   `BMC_USERNAME`/`BMC_PASSWORD`.
//! - Logging goes to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod format;

use std::sync::Arc;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCode;
use redfish_client::ClientRegistry;
use redfish_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {e}");
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let registry = Arc::new(ClientRegistry::with_builtin_vendors());

    let exit_code = match run_command(&cli, &registry).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::GeneralError
        }
    };

    std::process::exit(exit_code.as_i32());
}
