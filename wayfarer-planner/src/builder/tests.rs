//! Tests for the `ItineraryBuilder`.

use super::*;
use geo::Coord;
use rstest::{fixture, rstest};
use wayfarer_core::PointOfInterest;
use wayfarer_core::test_support::{FixedScorer, MemoryStore};

const REGION: &str = "seoul";

fn poi(id: u64, lat: f64, lon: f64) -> PointOfInterest {
    PointOfInterest::new(id, format!("attraction {id}"), Coord { x: lon, y: lat })
        .with_region(REGION)
        .with_categories(["Food"])
        .with_companions([Companion::Friends])
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, day).expect("valid date")
}

fn request(first: u32, last: u32) -> PlanRequest {
    PlanRequest {
        region: REGION.to_owned(),
        start_date: date(first),
        end_date: date(last),
        companion: Companion::Friends,
        interests: Interests::new(["Food"]),
    }
}

/// Five Food spots within a few kilometres of each other.
#[fixture]
fn five_spots() -> MemoryStore {
    MemoryStore::with_pois([
        poi(1, 37.570, 126.980),
        poi(2, 37.575, 126.985),
        poi(3, 37.560, 126.990),
        poi(4, 37.580, 126.970),
        poi(5, 37.565, 126.975),
    ])
}

fn all_ids(itinerary: &Itinerary) -> Vec<u64> {
    itinerary
        .days
        .iter()
        .flat_map(|day| day.poi_ids().collect::<Vec<_>>())
        .collect()
}

#[rstest]
fn thin_pool_spreads_two_stops_per_day(five_spots: MemoryStore) {
    let builder = ItineraryBuilder::new(five_spots, FixedScorer::new((1..=5).map(|id| (id, 3.0))));
    let itinerary = builder.plan(&request(20, 21)).expect("valid request");

    assert_eq!(itinerary.days.len(), 2);
    for day in &itinerary.days {
        assert_eq!(day.stops.len(), 2);
    }
    let ids = all_ids(&itinerary);
    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len(), "no repeats before a reset");
    assert_eq!(itinerary.diagnostics.stops_per_day, 2);
    assert_eq!(itinerary.diagnostics.candidates_considered, 5);
    assert_eq!(itinerary.diagnostics.pool_resets, 0);
    assert_eq!(
        itinerary.days.iter().map(|day| day.date).collect::<Vec<_>>(),
        vec![date(20), date(21)]
    );
}

#[rstest]
fn equal_scores_seed_each_day_with_the_lowest_unused_id(five_spots: MemoryStore) {
    let builder = ItineraryBuilder::new(five_spots, FixedScorer::new((1..=5).map(|id| (id, 3.0))));
    let itinerary = builder.plan(&request(20, 21)).expect("valid request");
    let firsts: Vec<_> = itinerary
        .days
        .iter()
        .filter_map(|day| day.stops.first().map(Stop::id))
        .collect();
    let first_day = itinerary.days.first().expect("first day");
    let expected_second_seed = (1..=5)
        .find(|id| !first_day.poi_ids().any(|used| used == *id))
        .expect("an unused id");
    assert_eq!(firsts, vec![1, expected_second_seed]);
}

#[rstest]
fn empty_store_gives_an_empty_itinerary() {
    let builder = ItineraryBuilder::new(MemoryStore::default(), FixedScorer::default());
    let itinerary = builder.plan(&request(20, 22)).expect("valid request");
    assert!(itinerary.is_empty());
    assert_eq!(itinerary.diagnostics.candidates_considered, 0);
}

#[rstest]
fn invalid_requests_are_rejected(five_spots: MemoryStore) {
    let builder = ItineraryBuilder::new(five_spots, FixedScorer::default());
    let err = builder.plan(&request(22, 20)).expect_err("inverted dates");
    assert!(matches!(err, PlanError::InvalidRequest(_)));
}

#[rstest]
fn exhausted_pool_is_recycled() {
    let store = MemoryStore::with_pois([poi(1, 37.57, 126.98), poi(2, 37.58, 126.98)]);
    let builder = ItineraryBuilder::new(store, FixedScorer::new([(1, 2.0), (2, 1.0)]));
    let itinerary = builder.plan(&request(20, 22)).expect("valid request");

    assert_eq!(itinerary.days.len(), 3);
    for day in &itinerary.days {
        assert_eq!(day.poi_ids().collect::<Vec<_>>(), vec![1, 2]);
    }
    assert_eq!(itinerary.diagnostics.pool_resets, 2);
}

#[rstest]
fn ranking_orders_by_score_then_id() {
    let store = MemoryStore::with_pois([
        poi(4, 37.57, 126.98),
        poi(2, 37.57, 126.98),
        poi(9, 37.57, 126.98),
        poi(7, 37.57, 126.98),
    ]);
    let scorer = FixedScorer::new([(4, 1.0), (2, 5.0), (9, 5.0), (7, f64::NAN)]);
    let builder = ItineraryBuilder::new(store, scorer);

    let ranked = builder.rank_candidates(&request(20, 20));
    let order: Vec<_> = ranked.iter().map(|c| (c.id(), c.score)).collect();
    assert_eq!(order, vec![(2, 5.0), (9, 5.0), (4, 1.0), (7, 0.0)]);
}

#[rstest]
fn signed_zero_scores_tie_on_id() {
    let store = MemoryStore::with_pois([
        poi(3, 37.57, 126.98),
        poi(1, 37.57, 126.98),
        poi(2, 37.57, 126.98),
    ]);
    let scorer = FixedScorer::new([(3, 0.0), (1, -0.0), (2, f64::NEG_INFINITY)]);
    let builder = ItineraryBuilder::new(store, scorer);

    let ranked = builder.rank_candidates(&request(20, 20));
    assert_eq!(ranked.iter().map(ScoredPoi::id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(ranked.iter().all(|candidate| candidate.score.is_sign_positive()));
}

#[rstest]
fn candidate_limit_caps_the_pool(five_spots: MemoryStore) {
    let config = PlannerConfig {
        candidate_limit: 3,
        ..PlannerConfig::default()
    };
    let builder = ItineraryBuilder::with_config(five_spots, FixedScorer::default(), config)
        .expect("valid config");
    let itinerary = builder.plan(&request(20, 20)).expect("valid request");
    assert_eq!(itinerary.diagnostics.candidates_considered, 3);
    assert!(all_ids(&itinerary).iter().all(|id| *id <= 3));
}

#[rstest]
fn distances_are_rounded_to_two_decimals(five_spots: MemoryStore) {
    let builder = ItineraryBuilder::new(five_spots, FixedScorer::default());
    let itinerary = builder.plan(&request(20, 20)).expect("valid request");
    for day in &itinerary.days {
        let scaled = day.total_distance_km * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-6);
    }
}

#[rstest]
fn build_matches_plan(five_spots: MemoryStore) {
    let builder = ItineraryBuilder::new(five_spots, FixedScorer::new([(3, 4.0)]));
    let planned = builder.plan(&request(20, 21)).expect("valid request");
    let built = builder
        .build(
            REGION,
            date(20),
            date(21),
            Companion::Friends,
            Interests::new(["Food"]),
        )
        .expect("valid request");
    assert_eq!(planned.days, built.days);
}

#[rstest]
fn invalid_configuration_is_rejected(five_spots: MemoryStore) {
    let config = PlannerConfig {
        day_start_hour: 22.0,
        ..PlannerConfig::default()
    };
    let result = ItineraryBuilder::with_config(five_spots, FixedScorer::default(), config);
    assert!(matches!(result, Err(PlannerConfigError::PastMidnight { .. })));
}
