//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "actuator", version, about = "Linear-actuator control CLI")]
pub struct Cli {
    /// Path to config TOML (typed)
    #[arg(long, value_name = "FILE", default_value = "etc/actuator.toml")]
    pub config: PathBuf,

    /// Emit results and errors as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Full-travel time of the simulated actuator (simulation builds only)
    #[arg(long, value_name = "MS", default_value_t = 1200)]
    pub sim_travel_ms: u32,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a homing calibration and park at the midpoint
    Home {
        /// Supervision: stop and latch an error if the run exceeds this many ms
        #[arg(long, value_name = "MS", default_value_t = 60_000)]
        max_run_ms: u32,
    },
    /// Drive to the extend limit and stop
    Extend {
        /// Supervision: stop and latch an error if the run exceeds this many ms
        #[arg(long, value_name = "MS", default_value_t = 30_000)]
        max_run_ms: u32,
    },
    /// Drive to the shrink limit and stop
    Shrink {
        /// Supervision: stop and latch an error if the run exceeds this many ms
        #[arg(long, value_name = "MS", default_value_t = 30_000)]
        max_run_ms: u32,
    },
}
