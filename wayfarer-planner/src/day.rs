//! Greedy construction of a single day's route.
//!
//! The day starts at the highest-scoring point in the pool. Each further stop
//! is the reachable point with the best trade-off between relevance and the
//! detour from the current position. The planner commits to that choice or
//! ends the day; it never backtracks or looks further ahead.

use std::fmt;
use std::sync::Arc;

use geo::Coord;
use log::debug;
use wayfarer_core::{ScoredPoi, Stop, TravelModel, distance_between};

use crate::{PlannerConfig, PlannerConfigError};

/// Why a day's route stopped growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStop {
    /// Every point in the pool has been placed, or the pool was empty.
    PoolExhausted,
    /// The day holds the requested number of stops.
    TargetReached,
    /// The clock reached the end of the day.
    BudgetSpent,
    /// No remaining point is open long enough at the current hour.
    NothingOpen,
    /// Travelling to the best remaining point would overrun the day.
    Overflow,
}

impl fmt::Display for DayStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PoolExhausted => "candidate pool exhausted",
            Self::TargetReached => "stop target reached",
            Self::BudgetSpent => "day budget spent",
            Self::NothingOpen => "no candidate open at the current hour",
            Self::Overflow => "best candidate would overrun the day",
        })
    }
}

/// A day's ordered stops and the straight-line distance travelled.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRoute {
    /// Stops in visiting order.
    pub stops: Vec<Stop>,
    /// Sum of the legs between consecutive stops, unrounded.
    pub total_distance_km: f64,
    /// Why construction ended.
    pub terminal: DayStop,
}

impl DayRoute {
    const fn empty(terminal: DayStop) -> Self {
        Self {
            stops: Vec::new(),
            total_distance_km: 0.0,
            terminal,
        }
    }
}

/// Greedy single-day planner.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::{PointOfInterest, ScoredPoi};
/// use wayfarer_planner::DayPlanner;
///
/// let pool = vec![
///     ScoredPoi::new(PointOfInterest::new(1, "Palace", Coord { x: 126.977, y: 37.579 }), 6.0),
///     ScoredPoi::new(PointOfInterest::new(2, "Market", Coord { x: 126.999, y: 37.570 }), 3.0),
/// ];
/// let route = DayPlanner::default().plan_day(&pool, 3);
///
/// assert_eq!(route.stops.len(), 2);
/// assert_eq!(route.stops[0].poi.id, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DayPlanner {
    config: PlannerConfig,
}

struct Cursor {
    hour: f64,
    location: Coord<f64>,
    distance_km: f64,
}

impl DayPlanner {
    /// Construct a planner with a validated configuration.
    ///
    /// # Errors
    /// Returns [`PlannerConfigError`] when the configuration is unusable.
    pub fn new(config: PlannerConfig) -> Result<Self, PlannerConfigError> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Build one day's route from `pool`, placing at most `target_count`
    /// stops.
    ///
    /// The first stop is the highest-scoring point, ties going to the lowest
    /// id; its opening hours are not checked. Each following stop must be
    /// open at the current hour and fit its visit before both its closing
    /// hour and the end of the day. Among those, the planner picks the
    /// highest `score * relevance_weight - distance`, again preferring the
    /// lowest id on ties. If travelling there would overrun the day the route
    /// ends instead of trying a lesser candidate.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the day clock advances in fractional hours"
    )]
    pub fn plan_day(&self, pool: &[ScoredPoi], target_count: usize) -> DayRoute {
        let mut remaining: Vec<&ScoredPoi> = pool.iter().collect();
        let Some(seed_index) = seed_position(&remaining) else {
            return DayRoute::empty(DayStop::PoolExhausted);
        };
        if target_count == 0 {
            return DayRoute::empty(DayStop::TargetReached);
        }

        let day_end = self.config.day_end_hour();
        let travel = self.config.travel_model();
        let seed = remaining.remove(seed_index);
        let mut cursor = Cursor {
            hour: self.config.day_start_hour,
            location: seed.poi.location,
            distance_km: 0.0,
        };
        let mut stops = Vec::with_capacity(target_count.min(pool.len()));
        stops.push(visit(seed, &mut cursor, 0.0, &travel));

        let terminal = loop {
            if remaining.is_empty() {
                break DayStop::PoolExhausted;
            }
            if stops.len() >= target_count {
                break DayStop::TargetReached;
            }
            if cursor.hour >= day_end {
                break DayStop::BudgetSpent;
            }
            let Some((index, distance_km)) = self.next_position(&remaining, &cursor, day_end)
            else {
                break DayStop::NothingOpen;
            };
            let chosen = remaining.remove(index);
            let arrival = cursor.hour + travel.hours_for(distance_km);
            if arrival + chosen.poi.avg_duration_hours > day_end {
                break DayStop::Overflow;
            }
            stops.push(visit(chosen, &mut cursor, distance_km, &travel));
        };

        debug!(
            "day route ended after {} stops ({:.2} km): {terminal}",
            stops.len(),
            cursor.distance_km
        );
        DayRoute {
            stops,
            total_distance_km: cursor.distance_km,
            terminal,
        }
    }

    /// Index and leg distance of the best open candidate, if any.
    #[expect(
        clippy::float_arithmetic,
        reason = "selection trades weighted relevance against kilometres"
    )]
    fn next_position(
        &self,
        remaining: &[&ScoredPoi],
        cursor: &Cursor,
        day_end: f64,
    ) -> Option<(usize, f64)> {
        remaining
            .iter()
            .enumerate()
            .filter(|(_, candidate)| candidate.poi.fits_window(cursor.hour, day_end))
            .map(|(index, candidate)| {
                let distance_km = distance_between(&cursor.location, &candidate.poi.location);
                let key = candidate.score * self.config.relevance_weight - distance_km;
                (index, distance_km, key, candidate.id())
            })
            .max_by(|lhs, rhs| lhs.2.total_cmp(&rhs.2).then_with(|| rhs.3.cmp(&lhs.3)))
            .map(|(index, distance_km, _, _)| (index, distance_km))
    }
}

/// Position of the highest score, ties going to the lowest id.
fn seed_position(remaining: &[&ScoredPoi]) -> Option<usize> {
    remaining
        .iter()
        .enumerate()
        .max_by(|(_, lhs), (_, rhs)| {
            lhs.score
                .total_cmp(&rhs.score)
                .then_with(|| rhs.id().cmp(&lhs.id()))
        })
        .map(|(index, _)| index)
}

/// Place `candidate` after a leg of `distance_km` and advance the cursor.
#[expect(
    clippy::float_arithmetic,
    reason = "the day clock advances in fractional hours"
)]
fn visit(
    candidate: &ScoredPoi,
    cursor: &mut Cursor,
    distance_km: f64,
    travel: &TravelModel,
) -> Stop {
    let arrival_hour = cursor.hour + travel.hours_for(distance_km);
    let departure_hour = arrival_hour + candidate.poi.avg_duration_hours;
    cursor.hour = departure_hour;
    cursor.location = candidate.poi.location;
    cursor.distance_km += distance_km;
    Stop {
        poi: Arc::clone(&candidate.poi),
        score: candidate.score,
        arrival_hour,
        departure_hour,
        travel_km: distance_km,
    }
}
