//! Command-line interface for the Wayfarer itinerary planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod fs;
mod plan;

pub use error::CliError;

use plan::{PlanArgs, run_plan};

const ARG_PLAN_REQUEST: &str = "request";
const ARG_PLAN_POIS_DB: &str = "pois-db";
const ARG_PLAN_DAY_START_HOUR: &str = "day-start-hour";
const ARG_PLAN_DAY_LENGTH_HOURS: &str = "day-length-hours";
const ARG_PLAN_AVERAGE_SPEED_KMH: &str = "average-speed-kmh";
const ENV_PLAN_REQUEST: &str = "WAYFARER_CMDS_PLAN_REQUEST_PATH";

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the Wayfarer CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, planning or
/// output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging()?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

/// Route `log` records and tracing events to stderr, filtered by `RUST_LOG`.
fn init_logging() -> Result<(), CliError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfarer",
    about = "Plan multi-day sightseeing itineraries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan an itinerary from a JSON request and an attraction database.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
