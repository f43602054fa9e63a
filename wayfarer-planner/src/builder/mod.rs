//! `ItineraryBuilder`: spreads ranked candidates across the days of a trip.
//!
//! Candidates are fetched once, scored, and ranked. Each day is planned from
//! the candidates not yet visited; when none are left the whole pool is
//! recycled and visits may repeat from that day on.

use std::collections::HashSet;
use std::time::Instant;

use chrono::NaiveDate;
use log::{debug, info};
use wayfarer_core::{
    CandidateQuery, Companion, DailyPlan, Diagnostics, Interests, Itinerary, PlanError,
    PlanRequest, Planner, PoiStore, ScoredPoi, Scorer, Stop,
};

use crate::{DayPlanner, PlannerConfig, PlannerConfigError};

/// Multi-day planner generic over the candidate store and the scorer.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use geo::Coord;
/// use wayfarer_core::{Companion, Interests, PointOfInterest, test_support::MemoryStore};
/// use wayfarer_planner::ItineraryBuilder;
/// use wayfarer_scorer::TagMatchScorer;
///
/// let store = MemoryStore::with_poi(
///     PointOfInterest::new(1, "Bulguksa", Coord { x: 129.33, y: 35.79 })
///         .with_region("gyeongju")
///         .with_categories(["History"])
///         .with_companions([Companion::Family]),
/// );
/// let builder = ItineraryBuilder::new(store, TagMatchScorer::default());
/// let day = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
///
/// let itinerary = builder
///     .build("gyeongju", day, day, Companion::Family, Interests::new(["History"]))
///     .unwrap();
/// assert_eq!(itinerary.days.len(), 1);
/// ```
pub struct ItineraryBuilder<S, C>
where
    S: PoiStore,
    C: Scorer,
{
    store: S,
    scorer: C,
    day_planner: DayPlanner,
}

impl<S, C> ItineraryBuilder<S, C>
where
    S: PoiStore,
    C: Scorer,
{
    /// Construct a builder using the default configuration.
    pub fn new(store: S, scorer: C) -> Self {
        Self {
            store,
            scorer,
            day_planner: DayPlanner::default(),
        }
    }

    /// Construct a builder with an explicit configuration.
    ///
    /// # Errors
    /// Returns [`PlannerConfigError`] when the configuration is unusable.
    pub fn with_config(
        store: S,
        scorer: C,
        config: PlannerConfig,
    ) -> Result<Self, PlannerConfigError> {
        Ok(Self {
            store,
            scorer,
            day_planner: DayPlanner::new(config)?,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        self.day_planner.config()
    }

    /// Plan a trip from positional arguments.
    ///
    /// # Errors
    /// Returns [`PlanError::InvalidRequest`] when the arguments do not form a
    /// valid [`PlanRequest`].
    pub fn build(
        &self,
        region: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        companion: Companion,
        interests: Interests,
    ) -> Result<Itinerary, PlanError> {
        self.plan(&PlanRequest {
            region: region.into(),
            start_date,
            end_date,
            companion,
            interests,
        })
    }

    /// Fetch, score and rank the candidates of a request.
    ///
    /// Higher scores come first; equal scores are ordered by ascending id.
    fn rank_candidates(&self, request: &PlanRequest) -> Vec<ScoredPoi> {
        let query = CandidateQuery::from(request).with_limit(self.config().candidate_limit);
        let mut ranked: Vec<ScoredPoi> = self
            .store
            .candidates(&query)
            .into_iter()
            .map(|poi| {
                let score = C::sanitise(self.scorer.score(&poi, &request.interests));
                ScoredPoi::new(poi, score)
            })
            .collect();

        ranked.sort_unstable_by(|lhs, rhs| {
            rhs.score
                .total_cmp(&lhs.score)
                .then_with(|| lhs.id().cmp(&rhs.id()))
        });
        ranked
    }
}

impl<S, C> Planner for ItineraryBuilder<S, C>
where
    S: PoiStore,
    C: Scorer,
{
    fn plan(&self, request: &PlanRequest) -> Result<Itinerary, PlanError> {
        request.validate()?;
        let started_at = Instant::now();

        let ranked = self.rank_candidates(request);
        if ranked.is_empty() {
            debug!("no candidates for region {}", request.region);
            return Ok(Itinerary::new(
                Vec::new(),
                Diagnostics {
                    plan_time: started_at.elapsed(),
                    ..Diagnostics::default()
                },
            ));
        }

        let stops_per_day = self.config().stops_per_day(ranked.len(), request.num_days());
        let mut used: HashSet<u64> = HashSet::with_capacity(ranked.len());
        let mut pool_resets = 0_u32;
        let mut days = Vec::with_capacity(request.num_days());

        for date in request.dates() {
            let mut available: Vec<ScoredPoi> = ranked
                .iter()
                .filter(|candidate| !used.contains(&candidate.id()))
                .cloned()
                .collect();
            if available.is_empty() {
                info!(
                    "all {} candidates visited by {date}; recycling the pool",
                    ranked.len()
                );
                used.clear();
                pool_resets = pool_resets.saturating_add(1);
                available.clone_from(&ranked);
            }

            let route = self.day_planner.plan_day(&available, stops_per_day);
            if route.stops.is_empty() {
                debug!("no feasible route on {date}; skipping day");
                continue;
            }
            used.extend(route.stops.iter().map(Stop::id));
            days.push(DailyPlan::new(date, route.stops, route.total_distance_km));
        }

        Ok(Itinerary::new(
            days,
            Diagnostics {
                candidates_considered: ranked.len(),
                stops_per_day,
                pool_resets,
                plan_time: started_at.elapsed(),
            },
        ))
    }
}

#[cfg(test)]
mod tests;
