//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not handle config loading (see `redfish-config`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "redfishctl")]
#[command(about = "redfishctl - Query and manage BMC fleets over Redfish", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  redfishctl sysinfo\n  redfishctl --config fleet.yaml storage raid health --drives\n  redfishctl -n 192.168.1.100 -u root -p calvin -t idrac eventlog\n  redfishctl power status -o table\n  redfishctl boot set Pxe\n"
)]
pub struct Cli {
    /// Path to the fleet configuration file.
    ///
    /// Defaults to $REDFISHCTL_CONFIG, then ~/.redfishctl/config.yaml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// BMC hostname or IP address (single-server mode, used when no config
    /// file lists any servers)
    #[arg(short = 'n', long, global = true)]
    pub host: Option<String>,

    /// BMC username (fallback for servers without one; BMC_USERNAME wins)
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// BMC password (fallback for servers without one; BMC_PASSWORD wins)
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// Vendor tag for single-server mode (see `redfishctl vendors`)
    #[arg(short = 't', long, global = true, default_value = "idrac")]
    pub vendor: String,

    /// Per-request timeout in seconds (default 30)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Verify BMC TLS certificates (off by default; BMCs ship self-signed)
    #[arg(long, global = true)]
    pub verify_tls: bool,

    /// Output format (json, yaml, table)
    #[arg(short, long, global = true, default_value = "json")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show system information for every server in the fleet
    Sysinfo,

    /// Storage subsystem queries
    Storage {
        #[command(subcommand)]
        command: StorageCommand,
    },

    /// Show the system event log for every server in the fleet
    Eventlog,

    /// Query or change server power state
    Power {
        #[command(subcommand)]
        command: PowerCommand,
    },

    /// Query or override the next boot device
    Boot {
        #[command(subcommand)]
        command: BootCommand,
    },

    /// List the supported BMC vendor tags
    Vendors,
}

#[derive(Subcommand)]
pub enum StorageCommand {
    /// List storage controller inventory detail for every server
    Controllers,

    /// RAID controller queries
    Raid {
        #[command(subcommand)]
        command: RaidCommand,
    },
}

#[derive(Subcommand)]
pub enum RaidCommand {
    /// Show RAID controller health for every server in the fleet
    Health {
        /// Include per-drive detail for each controller
        #[arg(long)]
        drives: bool,
    },
}

#[derive(Subcommand)]
pub enum PowerCommand {
    /// Show the power state of every server in the fleet
    Status,
    /// Power every server on
    On,
    /// Force every server off
    Off,
    /// Gracefully restart every server
    Reboot,
}

#[derive(Subcommand)]
pub enum BootCommand {
    /// Show the next-boot override settings of every server
    Get,
    /// Override the next boot device on every server (e.g. Pxe, Hdd, Cd)
    Set {
        /// Redfish boot source override target
        device: String,
    },
}
