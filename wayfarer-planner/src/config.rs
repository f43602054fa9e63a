//! Tunable parameters shared by the day planner and the itinerary builder.

use thiserror::Error;
use wayfarer_core::{CANDIDATE_LIMIT, TravelModel};

/// Last hour of the 24-hour clock a day may extend to.
const MIDNIGHT: f64 = 24.0;

/// Configuration for [`DayPlanner`](crate::DayPlanner) and
/// [`ItineraryBuilder`](crate::ItineraryBuilder).
///
/// The defaults plan a 09:00 to 21:00 day at 30 km/h, aim for three to five
/// stops a day, and consider at most [`CANDIDATE_LIMIT`] candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Hour at which every day starts.
    pub day_start_hour: f64,
    /// Hours available for visits and travel each day.
    pub day_length_hours: f64,
    /// Average door-to-door speed between stops.
    pub average_speed_kmh: f64,
    /// Kilometres of detour one point of relevance is worth when choosing
    /// the next stop.
    pub relevance_weight: f64,
    /// Lower bound of the per-day stop target.
    pub min_stops_per_day: usize,
    /// Upper bound of the per-day stop target.
    pub max_stops_per_day: usize,
    /// Floor of the per-day target when the pool is too thin for
    /// `min_stops_per_day` stops on every day.
    pub thin_pool_stops: usize,
    /// Maximum number of candidates requested from the store.
    pub candidate_limit: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            day_start_hour: 9.0,
            day_length_hours: 12.0,
            average_speed_kmh: 30.0,
            relevance_weight: 10.0,
            min_stops_per_day: 3,
            max_stops_per_day: 5,
            thin_pool_stops: 2,
            candidate_limit: CANDIDATE_LIMIT,
        }
    }
}

/// Errors raised when a [`PlannerConfig`] is unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerConfigError {
    /// A value was NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A value was below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Travel would never reach another stop.
    #[error("average speed must be positive")]
    ZeroSpeed,
    /// The day runs past midnight.
    #[error("a day starting at {start} and lasting {length} hours ends after midnight")]
    PastMidnight {
        /// Configured start hour.
        start: f64,
        /// Configured day length.
        length: f64,
    },
    /// The stop bounds are inverted.
    #[error("minimum of {min} stops per day exceeds maximum of {max}")]
    StopBoundsInverted {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
}

impl PlannerConfig {
    /// Validate the configuration and return a copy.
    ///
    /// # Errors
    /// Returns [`PlannerConfigError`] when an hour, speed or weight is not
    /// finite or is negative, the speed is zero, the day ends after hour 24,
    /// or `min_stops_per_day` exceeds `max_stops_per_day`.
    pub fn validate(self) -> Result<Self, PlannerConfigError> {
        for (field, value) in [
            ("day_start_hour", self.day_start_hour),
            ("day_length_hours", self.day_length_hours),
            ("average_speed_kmh", self.average_speed_kmh),
            ("relevance_weight", self.relevance_weight),
        ] {
            if !value.is_finite() {
                return Err(PlannerConfigError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(PlannerConfigError::Negative { field, value });
            }
        }
        if self.average_speed_kmh == 0.0 {
            return Err(PlannerConfigError::ZeroSpeed);
        }
        if self.day_end_hour() > MIDNIGHT {
            return Err(PlannerConfigError::PastMidnight {
                start: self.day_start_hour,
                length: self.day_length_hours,
            });
        }
        if self.min_stops_per_day > self.max_stops_per_day {
            return Err(PlannerConfigError::StopBoundsInverted {
                min: self.min_stops_per_day,
                max: self.max_stops_per_day,
            });
        }
        Ok(self)
    }

    /// Hour by which every visit must have ended.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "day end is start plus length")]
    pub fn day_end_hour(&self) -> f64 {
        self.day_start_hour + self.day_length_hours
    }

    /// Travel model derived from the configured speed.
    #[must_use]
    pub const fn travel_model(&self) -> TravelModel {
        TravelModel::new(self.average_speed_kmh)
    }

    /// Per-day stop target for a pool of `total` candidates spread over
    /// `num_days` days.
    ///
    /// The even share `total / num_days` is clamped to
    /// `min_stops_per_day..=max_stops_per_day`. When the pool cannot give
    /// every day `min_stops_per_day` stops, the target falls back to the even
    /// share with a floor of `thin_pool_stops`. An unvalidated configuration
    /// with inverted bounds does not panic; `max_stops_per_day` wins.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_planner::PlannerConfig;
    ///
    /// let config = PlannerConfig::default();
    /// assert_eq!(config.stops_per_day(30, 3), 5);
    /// assert_eq!(config.stops_per_day(9, 3), 3);
    /// assert_eq!(config.stops_per_day(5, 2), 2);
    /// ```
    #[must_use]
    pub fn stops_per_day(&self, total: usize, num_days: usize) -> usize {
        let share = total.checked_div(num_days).unwrap_or(total);
        let thin = num_days
            .checked_mul(self.min_stops_per_day)
            .is_none_or(|needed| total < needed);
        if thin {
            share.max(self.thin_pool_stops)
        } else {
            share
                .max(self.min_stops_per_day)
                .min(self.max_stops_per_day)
        }
    }
}
