//! Points of interest and their per-request relevance pairing.

use std::collections::BTreeSet;
use std::sync::Arc;

use geo::Coord;
use thiserror::Error;

use crate::Companion;

/// Visit length assumed when a record does not specify one, in hours.
pub const DEFAULT_VISIT_HOURS: f64 = 1.0;
/// Opening hour assumed when a record does not specify one.
pub const DEFAULT_OPENING_HOUR: u8 = 9;
/// Closing hour assumed when a record does not specify one.
pub const DEFAULT_CLOSING_HOUR: u8 = 22;
/// Last valid hour on the 0–24 clock.
pub const LAST_HOUR: u8 = 24;

/// A location worth visiting.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. Opening and
/// closing hours live on a 0–24 clock; a visit must end no later than
/// `closing_hour`.
///
/// The relevance score is deliberately absent: scores depend on the request
/// and travel beside the point as a [`ScoredPoi`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::{Companion, PointOfInterest};
///
/// let poi = PointOfInterest::new(1, "Gyeongbokgung", Coord { x: 126.977, y: 37.579 })
///     .with_region("seoul")
///     .with_categories(["History"])
///     .with_companions([Companion::Family])
///     .with_duration(2.0)
///     .with_hours(9, 18);
///
/// assert_eq!(poi.latitude(), 37.579);
/// assert!(poi.supports(Companion::Family));
/// assert!(poi.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    /// Opaque identifier, unique within a candidate pool.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Region tag the point belongs to.
    pub region: String,
    /// Category tags matched against the traveller's interests.
    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: BTreeSet<String>,
    /// Companion types the point is suitable for.
    #[cfg_attr(feature = "serde", serde(default))]
    pub companions: BTreeSet<Companion>,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Average visit length in hours.
    pub avg_duration_hours: f64,
    /// First hour at which a visit may start.
    pub opening_hour: u8,
    /// Hour by which a visit must have ended.
    pub closing_hour: u8,
}

/// Errors returned by [`PointOfInterest::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PointOfInterestError {
    /// An opening or closing hour was beyond the 24-hour clock.
    #[error("hour {hour} is outside 0..=24 for point of interest {id}")]
    HourOutOfRange {
        /// Identifier of the offending point.
        id: u64,
        /// The rejected hour.
        hour: u8,
    },
    /// The point opens after it closes.
    #[error("point of interest {id} opens at {opening} but closes at {closing}")]
    OpeningAfterClosing {
        /// Identifier of the offending point.
        id: u64,
        /// Opening hour.
        opening: u8,
        /// Closing hour.
        closing: u8,
    },
    /// The average visit duration was negative or not finite.
    #[error("point of interest {id} has invalid visit duration {hours}")]
    InvalidDuration {
        /// Identifier of the offending point.
        id: u64,
        /// The rejected duration in hours.
        hours: f64,
    },
}

impl PointOfInterest {
    /// Construct a point with default hours (9–22), a one-hour visit, and no
    /// region, categories, or companions.
    pub fn new(id: u64, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id,
            name: name.into(),
            region: String::new(),
            categories: BTreeSet::new(),
            companions: BTreeSet::new(),
            location,
            avg_duration_hours: DEFAULT_VISIT_HOURS,
            opening_hour: DEFAULT_OPENING_HOUR,
            closing_hour: DEFAULT_CLOSING_HOUR,
        }
    }

    /// Set the region tag.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Replace the category tags.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the supported companion types.
    #[must_use]
    pub fn with_companions<I>(mut self, companions: I) -> Self
    where
        I: IntoIterator<Item = Companion>,
    {
        self.companions = companions.into_iter().collect();
        self
    }

    /// Set the average visit duration in hours.
    #[must_use]
    pub fn with_duration(mut self, hours: f64) -> Self {
        self.avg_duration_hours = hours;
        self
    }

    /// Set the opening and closing hours.
    #[must_use]
    pub fn with_hours(mut self, opening_hour: u8, closing_hour: u8) -> Self {
        self.opening_hour = opening_hour;
        self.closing_hour = closing_hour;
        self
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Report whether the point welcomes the given companion type.
    #[must_use]
    pub fn supports(&self, companion: Companion) -> bool {
        self.companions.contains(&companion)
    }

    /// Report whether a visit starting at `at_hour` fits both the point's own
    /// hours and a day that must end by `day_end_hour`.
    ///
    /// Travel time is not part of this check.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use wayfarer_core::PointOfInterest;
    ///
    /// let poi = PointOfInterest::new(1, "Market", Coord { x: 0.0, y: 0.0 })
    ///     .with_duration(2.0)
    ///     .with_hours(10, 18);
    ///
    /// assert!(!poi.fits_window(9.0, 21.0));
    /// assert!(poi.fits_window(16.0, 21.0));
    /// assert!(!poi.fits_window(16.5, 21.0));
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "visit windows are fractional hours"
    )]
    pub fn fits_window(&self, at_hour: f64, day_end_hour: f64) -> bool {
        let closes = f64::from(self.closing_hour).min(day_end_hour);
        f64::from(self.opening_hour) <= at_hour && at_hour + self.avg_duration_hours <= closes
    }

    /// Check the record for values the planner cannot reason about.
    ///
    /// # Errors
    /// Returns [`PointOfInterestError`] when an hour exceeds 24, the point
    /// opens after it closes, or the visit duration is negative or not finite.
    pub fn validate(&self) -> Result<(), PointOfInterestError> {
        for hour in [self.opening_hour, self.closing_hour] {
            if hour > LAST_HOUR {
                return Err(PointOfInterestError::HourOutOfRange { id: self.id, hour });
            }
        }
        if self.opening_hour > self.closing_hour {
            return Err(PointOfInterestError::OpeningAfterClosing {
                id: self.id,
                opening: self.opening_hour,
                closing: self.closing_hour,
            });
        }
        if !self.avg_duration_hours.is_finite() || self.avg_duration_hours < 0.0 {
            return Err(PointOfInterestError::InvalidDuration {
                id: self.id,
                hours: self.avg_duration_hours,
            });
        }
        Ok(())
    }
}

/// A point of interest paired with the relevance score computed for the
/// current request.
///
/// The point is shared through an [`Arc`] so the same record can appear in
/// several daily plans without being copied.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPoi {
    /// The scored point.
    pub poi: Arc<PointOfInterest>,
    /// Relevance score for the current request.
    pub score: f64,
}

impl ScoredPoi {
    /// Pair a point with its score.
    pub fn new(poi: impl Into<Arc<PointOfInterest>>, score: f64) -> Self {
        Self {
            poi: poi.into(),
            score,
        }
    }

    /// Identifier of the underlying point.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.poi.id
    }
}
