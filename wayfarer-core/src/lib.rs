//! Core domain types for the Wayfarer itinerary engine.
//!
//! The crate defines the vocabulary shared by the scorer, the planner and
//! the command-line front end: points of interest, interests, companions,
//! plan requests, daily plans, and the traits at the engine boundaries
//! ([`Scorer`], [`PoiStore`] and [`Planner`]). It also provides the
//! great-circle distance used by the day planner.
//!
//! Constructors and `validate` methods return `Result` so malformed input is
//! rejected at the boundary instead of surfacing as undefined arithmetic deep
//! inside the planner.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod companion;
pub mod interests;
pub mod itinerary;
pub mod planner;
pub mod poi;
pub mod scorer;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod travel;

pub use companion::{Companion, ParseCompanionError};
pub use interests::Interests;
pub use itinerary::{DailyPlan, Diagnostics, Itinerary, Stop, round_km};
pub use planner::{MAX_TRIP_DAYS, PlanError, PlanRequest, PlanRequestError, Planner};
pub use poi::{PointOfInterest, PointOfInterestError, ScoredPoi};
pub use scorer::Scorer;
pub use store::{CANDIDATE_LIMIT, CandidateQuery, PoiStore};
#[cfg(feature = "store-sqlite")]
pub use store::{SqlitePoiStore, SqlitePoiStoreError};
pub use travel::{EARTH_RADIUS_KM, TravelModel, distance_between, haversine_km};
