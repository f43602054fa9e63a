//! Planning requests and the planner trait.

use chrono::NaiveDate;
use thiserror::Error;

use crate::{Companion, Interests, Itinerary};

/// Longest date range, in days, a single request may span.
pub const MAX_TRIP_DAYS: usize = 366;

/// Parameters for a planning request.
///
/// Both dates are inclusive: a request from the 20th to the 21st covers two
/// days.
///
/// # Examples
/// ```rust
/// use chrono::NaiveDate;
/// use wayfarer_core::{Companion, Interests, PlanRequest};
///
/// let request = PlanRequest {
///     region: "seoul".into(),
///     start_date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 12, 21).unwrap(),
///     companion: Companion::Friends,
///     interests: Interests::new(["Food"]),
/// };
/// assert!(request.validate().is_ok());
/// assert_eq!(request.num_days(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Region the candidates must belong to.
    pub region: String,
    /// First day of the trip.
    pub start_date: NaiveDate,
    /// Last day of the trip.
    pub end_date: NaiveDate,
    /// Who the traveller is visiting with.
    pub companion: Companion,
    /// Requested interest tags, duplicates preserved.
    pub interests: Interests,
}

/// Reasons a [`PlanRequest`] is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanRequestError {
    /// The trip ends before it starts.
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart {
        /// Requested first day.
        start: NaiveDate,
        /// Requested last day.
        end: NaiveDate,
    },
    /// The region was blank.
    #[error("region must not be empty")]
    EmptyRegion,
    /// No interest tags were given.
    #[error("at least one interest is required")]
    NoInterests,
    /// The date range is longer than [`MAX_TRIP_DAYS`].
    #[error("trip spans {days} days; at most {max} are supported")]
    TooManyDays {
        /// Days covered by the request.
        days: usize,
        /// Largest supported span.
        max: usize,
    },
}

impl PlanRequest {
    /// Number of calendar days covered, both ends included.
    ///
    /// Returns zero when `end_date` precedes `start_date`.
    #[must_use]
    pub fn num_days(&self) -> usize {
        self.end_date
            .signed_duration_since(self.start_date)
            .num_days()
            .checked_add(1)
            .and_then(|days| usize::try_from(days).ok())
            .unwrap_or(0)
    }

    /// Iterate over the dates of the trip in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(|date| *date <= self.end_date)
    }

    /// Check the request before any planning work is done.
    ///
    /// # Errors
    /// Returns [`PlanRequestError`] when the dates are inverted, the region
    /// is blank, no interests are given, or the range exceeds
    /// [`MAX_TRIP_DAYS`].
    pub fn validate(&self) -> Result<(), PlanRequestError> {
        if self.end_date < self.start_date {
            return Err(PlanRequestError::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.region.trim().is_empty() {
            return Err(PlanRequestError::EmptyRegion);
        }
        if self.interests.is_empty() {
            return Err(PlanRequestError::NoInterests);
        }
        let days = self.num_days();
        if days > MAX_TRIP_DAYS {
            return Err(PlanRequestError::TooManyDays {
                days,
                max: MAX_TRIP_DAYS,
            });
        }
        Ok(())
    }
}

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Request parameters were invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] PlanRequestError),
}

/// Produce a multi-day itinerary for a request.
///
/// Implementations return [`PlanError::InvalidRequest`] for malformed
/// requests rather than panicking. An itinerary with no days is a valid
/// answer when nothing matches. Planners must be `Send + Sync` so one
/// instance can serve concurrent callers.
pub trait Planner: Send + Sync {
    /// Plan a request, producing an itinerary or an error.
    ///
    /// # Errors
    /// Returns [`PlanError`] when the request fails validation.
    fn plan(&self, request: &PlanRequest) -> Result<Itinerary, PlanError>;
}
