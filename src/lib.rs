//! Facade crate for the Wayfarer itinerary planner.
//!
//! This crate re-exports the core domain types together with the default
//! scorer and planner. The SQLite candidate store is available behind the
//! `store-sqlite` feature.
//!
//! # Examples
//! ```
//! use chrono::NaiveDate;
//! use geo::Coord;
//! use wayfarer_core::test_support::MemoryStore;
//! use wayfarer::{Companion, Interests, ItineraryBuilder, PointOfInterest, TagMatchScorer};
//!
//! let store = MemoryStore::with_poi(
//!     PointOfInterest::new(7, "Seongsan Ilchulbong", Coord { x: 126.94, y: 33.46 })
//!         .with_region("jeju")
//!         .with_categories(["Nature"])
//!         .with_companions([Companion::Solo]),
//! );
//! let builder = ItineraryBuilder::new(store, TagMatchScorer::default());
//! let day = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
//!
//! let itinerary = builder
//!     .build("jeju", day, day, Companion::Solo, Interests::new(["Nature"]))
//!     .unwrap();
//! assert_eq!(itinerary.total_stops(), 1);
//! ```

#![forbid(unsafe_code)]

pub use wayfarer_core::{
    Companion, DailyPlan, Diagnostics, Interests, Itinerary, PlanError, PlanRequest,
    PlanRequestError, Planner, PoiStore, PointOfInterest, ScoredPoi, Scorer, Stop,
    distance_between, haversine_km,
};
pub use wayfarer_planner::{DayPlanner, ItineraryBuilder, PlannerConfig, PlannerConfigError};
pub use wayfarer_scorer::{MatchWeights, TagMatchScorer};

#[cfg(feature = "store-sqlite")]
pub use wayfarer_core::{SqlitePoiStore, SqlitePoiStoreError};

#[cfg(feature = "test-support")]
pub use wayfarer_core::test_support;
