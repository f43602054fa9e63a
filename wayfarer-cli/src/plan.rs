//! Plan command implementation for the Wayfarer CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use wayfarer_core::{Itinerary, PlanRequest, Planner, SqlitePoiStore};
use wayfarer_planner::{ItineraryBuilder, PlannerConfig};
use wayfarer_scorer::TagMatchScorer;

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_PLAN_AVERAGE_SPEED_KMH, ARG_PLAN_DAY_LENGTH_HOURS, ARG_PLAN_DAY_START_HOUR,
    ARG_PLAN_POIS_DB, ARG_PLAN_REQUEST, CliError, ENV_PLAN_REQUEST,
};

/// Database consulted when `--pois-db` is not given.
const DEFAULT_POIS_DB: &str = "pois.db";

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Plan a multi-day itinerary. The request is a JSON-encoded \
                 PlanRequest naming the region, inclusive dates, companion \
                 type and interests; candidates come from a SQLite attraction \
                 database. The itinerary is printed to stdout as JSON.",
    about = "Plan a multi-day itinerary"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a PlanRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the SQLite attraction database (defaults to `pois.db`).
    #[arg(long = ARG_PLAN_POIS_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) pois_db: Option<Utf8PathBuf>,
    /// Hour of day at which every day starts.
    #[arg(long = ARG_PLAN_DAY_START_HOUR, value_name = "hour")]
    #[serde(default)]
    pub(crate) day_start_hour: Option<f64>,
    /// Hours available for visits and travel each day.
    #[arg(long = ARG_PLAN_DAY_LENGTH_HOURS, value_name = "hours")]
    #[serde(default)]
    pub(crate) day_length_hours: Option<f64>,
    /// Constant travel speed in km/h.
    #[arg(long = ARG_PLAN_AVERAGE_SPEED_KMH, value_name = "kmh")]
    #[serde(default)]
    pub(crate) average_speed_kmh: Option<f64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the SQLite attraction database.
    pub(crate) pois_db: Utf8PathBuf,
    /// Validated planner settings.
    pub(crate) planner: PlannerConfig,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)?;
        Self::require_existing(&self.pois_db, ARG_PLAN_POIS_DB)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let pois_db = args
            .pois_db
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_POIS_DB));

        let defaults = PlannerConfig::default();
        let planner = PlannerConfig {
            day_start_hour: args.day_start_hour.unwrap_or(defaults.day_start_hour),
            day_length_hours: args.day_length_hours.unwrap_or(defaults.day_length_hours),
            average_speed_kmh: args.average_speed_kmh.unwrap_or(defaults.average_speed_kmh),
            ..defaults
        }
        .validate()?;

        Ok(Self {
            request_path,
            pois_db,
            planner,
        })
    }
}

/// Builds a planner for the current invocation.
pub(super) trait PlannerFactory {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn Planner>, CliError>;
}

/// Plans against the SQLite attraction database with tag-match scoring.
pub(super) struct SqlitePlannerFactory;

impl PlannerFactory for SqlitePlannerFactory {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn Planner>, CliError> {
        let store = SqlitePoiStore::open(config.pois_db.as_std_path())?;
        info!("loaded {} attractions from {}", store.len(), config.pois_db);
        let builder =
            ItineraryBuilder::with_config(store, TagMatchScorer::default(), config.planner)?;
        Ok(Box::new(builder))
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &SqlitePlannerFactory, &mut stdout)
}

pub(super) fn run_plan_with(
    args: PlanArgs,
    factory: &dyn PlannerFactory,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let itinerary = execute_plan(args, factory)?;
    write_itinerary(writer, &itinerary)
}

fn execute_plan(args: PlanArgs, factory: &dyn PlannerFactory) -> Result<Itinerary, CliError> {
    let config = resolve_plan_config(args)?;
    let request = load_plan_request(&config.request_path)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidPlanRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let planner = factory.build(&config)?;
    planner
        .plan(&request)
        .map_err(|source| CliError::Plan { source })
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_itinerary(writer: &mut dyn Write, itinerary: &Itinerary) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(itinerary).map_err(CliError::SerialiseItinerary)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteItinerary)?;
    writer.write_all(b"\n").map_err(CliError::WriteItinerary)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
