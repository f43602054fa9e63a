//! Daily plans and the multi-day itinerary assembled from them.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use crate::PointOfInterest;

/// Round a distance to two decimal places (ten-metre precision).
///
/// # Examples
/// ```
/// use wayfarer_core::round_km;
///
/// assert_eq!(round_km(3.14159), 3.14);
/// assert_eq!(round_km(2.005_1), 2.01);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "rounding to centi-kilometres")]
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// A point of interest as placed in a day's route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// The visited point, shared with the candidate pool.
    pub poi: Arc<PointOfInterest>,
    /// Relevance score the point carried when it was chosen.
    pub score: f64,
    /// Hour of day at which the visit starts.
    pub arrival_hour: f64,
    /// Hour of day at which the visit ends.
    pub departure_hour: f64,
    /// Straight-line distance from the previous stop; zero for the first.
    pub travel_km: f64,
}

impl Stop {
    /// Identifier of the visited point.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.poi.id
    }
}

/// One calendar day of the itinerary.
///
/// Stops are in visiting order. `total_distance_km` sums the legs between
/// consecutive stops and is rounded to two decimals on construction.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wayfarer_core::DailyPlan;
///
/// let date = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
/// let plan = DailyPlan::new(date, Vec::new(), 1.23456);
///
/// assert_eq!(plan.total_distance_km, 1.23);
/// assert!(plan.stops.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyPlan {
    /// Calendar date of the day.
    pub date: NaiveDate,
    /// Ordered stops of the day.
    pub stops: Vec<Stop>,
    /// Total straight-line travel in kilometres, two decimals.
    pub total_distance_km: f64,
}

impl DailyPlan {
    /// Build a plan, rounding the distance to two decimals.
    #[must_use]
    pub fn new(date: NaiveDate, stops: Vec<Stop>, total_distance_km: f64) -> Self {
        Self {
            date,
            stops,
            total_distance_km: round_km(total_distance_km),
        }
    }

    /// Identifiers of the visited points, in order.
    pub fn poi_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.stops.iter().map(Stop::id)
    }
}

/// Counters describing how an itinerary was produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Candidates returned by the store for the request.
    pub candidates_considered: usize,
    /// Stop target applied to every day.
    pub stops_per_day: usize,
    /// How many times the used set was cleared to recycle the pool.
    pub pool_resets: u32,
    /// Wall-clock time spent planning.
    pub plan_time: Duration,
}

/// The planner's answer: one entry per day that yielded a feasible route.
///
/// Days without any reachable point are omitted, so `days.len()` may be
/// smaller than the length of the requested date range.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    /// Daily plans in date order.
    pub days: Vec<DailyPlan>,
    /// How the itinerary was produced.
    pub diagnostics: Diagnostics,
}

impl Itinerary {
    /// Construct an itinerary.
    #[must_use]
    pub const fn new(days: Vec<DailyPlan>, diagnostics: Diagnostics) -> Self {
        Self { days, diagnostics }
    }

    /// Report whether no day could be planned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of stops across all days.
    #[must_use]
    pub fn total_stops(&self) -> usize {
        self.days.iter().map(|day| day.stops.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::rstest;

    fn stop(id: u64) -> Stop {
        Stop {
            poi: Arc::new(PointOfInterest::new(id, "Stop", Coord { x: 0.0, y: 0.0 })),
            score: 1.0,
            arrival_hour: 9.0,
            departure_hour: 10.0,
            travel_km: 0.0,
        }
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.234, 1.23)]
    #[case(1.235_1, 1.24)]
    #[case(12.999, 13.0)]
    fn distances_round_to_two_decimals(#[case] raw: f64, #[case] expected: f64) {
        assert!((round_km(raw) - expected).abs() < 1e-12);
    }

    #[rstest]
    fn plan_preserves_stop_order() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
        let plan = DailyPlan::new(date, vec![stop(3), stop(1), stop(2)], 4.567);
        assert_eq!(plan.poi_ids().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert!((plan.total_distance_km - 4.57).abs() < 1e-12);
    }

    #[rstest]
    fn itinerary_counts_stops_across_days() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
        let next = date.succ_opt().unwrap();
        let itinerary = Itinerary::new(
            vec![
                DailyPlan::new(date, vec![stop(1), stop(2)], 1.0),
                DailyPlan::new(next, vec![stop(3)], 0.0),
            ],
            Diagnostics::default(),
        );
        assert_eq!(itinerary.total_stops(), 3);
        assert!(!itinerary.is_empty());
        assert!(Itinerary::default().is_empty());
    }
}
