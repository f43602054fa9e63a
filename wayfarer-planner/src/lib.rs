//! Greedy multi-day itinerary planning for Wayfarer.
//!
//! This crate provides [`ItineraryBuilder`], the default implementation of the
//! [`Planner`](wayfarer_core::Planner) trait, and the [`DayPlanner`] it runs
//! once per calendar day.
//!
//! Planning is deterministic and synchronous: the builder fetches candidates
//! from a [`PoiStore`](wayfarer_core::PoiStore), ranks them with a
//! [`Scorer`](wayfarer_core::Scorer), derives a per-day stop target, and asks
//! the day planner for a route over the candidates not yet visited. Every
//! choice between equally good candidates goes to the lowest id.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod config;
mod day;

pub use builder::ItineraryBuilder;
pub use config::{PlannerConfig, PlannerConfigError};
pub use day::{DayPlanner, DayRoute, DayStop};
