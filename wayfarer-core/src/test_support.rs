//! Test-only helpers shared by unit, behaviour and downstream crate tests:
//! an in-memory `PoiStore`, a fixed-score `Scorer`, and writers for SQLite
//! attraction databases.

use std::collections::HashMap;

use crate::{CandidateQuery, Interests, PoiStore, PointOfInterest, Scorer};

/// In-memory `PoiStore` implementation used in tests.
///
/// The store performs a linear scan in insertion order and is intended only
/// for small datasets.
#[derive(Default, Debug, Clone)]
pub struct MemoryStore {
    pois: Vec<PointOfInterest>,
}

impl MemoryStore {
    /// Create a store containing a single point of interest.
    #[must_use]
    pub fn with_poi(poi: PointOfInterest) -> Self {
        Self::with_pois(std::iter::once(poi))
    }

    /// Create a store from a collection of points of interest.
    pub fn with_pois<I>(pois: I) -> Self
    where
        I: IntoIterator<Item = PointOfInterest>,
    {
        Self {
            pois: pois.into_iter().collect(),
        }
    }
}

impl PoiStore for MemoryStore {
    fn candidates(&self, query: &CandidateQuery) -> Vec<PointOfInterest> {
        self.pois
            .iter()
            .filter(|poi| query.matches(poi))
            .take(query.limit)
            .cloned()
            .collect()
    }
}

/// `Scorer` returning preassigned scores by point id, zero otherwise.
#[derive(Default, Debug, Clone)]
pub struct FixedScorer {
    scores: HashMap<u64, f64>,
}

impl FixedScorer {
    /// Build a scorer from `(id, score)` pairs.
    pub fn new<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = (u64, f64)>,
    {
        Self {
            scores: scores.into_iter().collect(),
        }
    }
}

impl Scorer for FixedScorer {
    fn score(&self, poi: &PointOfInterest, _interests: &Interests) -> f64 {
        self.scores.get(&poi.id).copied().unwrap_or(0.0)
    }
}

/// Create the attraction tables expected by
/// [`SqlitePoiStore`](crate::SqlitePoiStore).
///
/// # Errors
/// Propagates any `rusqlite` failure.
#[cfg(feature = "store-sqlite")]
#[cfg_attr(docsrs, doc(cfg(feature = "store-sqlite")))]
pub fn create_sqlite_schema(connection: &rusqlite::Connection) -> rusqlite::Result<()> {
    connection.execute_batch(
        "CREATE TABLE attractions (
             id INTEGER PRIMARY KEY,
             name TEXT NOT NULL,
             region TEXT NOT NULL,
             latitude REAL NOT NULL,
             longitude REAL NOT NULL,
             avg_duration REAL,
             opening_time INTEGER,
             closing_time INTEGER,
             popularity_score REAL
         );
         CREATE TABLE attraction_categories (
             attraction_id INTEGER NOT NULL REFERENCES attractions(id),
             category TEXT NOT NULL
         );
         CREATE TABLE attraction_companions (
             attraction_id INTEGER NOT NULL REFERENCES attractions(id),
             companion_type TEXT NOT NULL
         );",
    )
}

/// Persist `pois` into a fresh SQLite database at `path`.
///
/// Popularity follows slice order: the first point is the most popular, so
/// [`SqlitePoiStore`](crate::SqlitePoiStore) returns candidates in the order
/// given here.
///
/// # Errors
/// Propagates any `rusqlite` failure.
#[cfg(feature = "store-sqlite")]
#[cfg_attr(docsrs, doc(cfg(feature = "store-sqlite")))]
pub fn write_sqlite_database(
    path: &std::path::Path,
    pois: &[PointOfInterest],
) -> rusqlite::Result<()> {
    use rusqlite::params;

    let mut connection = rusqlite::Connection::open(path)?;
    create_sqlite_schema(&connection)?;
    let tx = connection.transaction()?;
    for (rank, poi) in pois.iter().enumerate() {
        let popularity = pois.len() - rank;
        tx.execute(
            "INSERT INTO attractions (id, name, region, latitude, longitude,
                 avg_duration, opening_time, closing_time, popularity_score)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                poi.id,
                poi.name,
                poi.region,
                poi.latitude(),
                poi.longitude(),
                poi.avg_duration_hours,
                poi.opening_hour,
                poi.closing_hour,
                popularity,
            ],
        )?;
        for category in &poi.categories {
            tx.execute(
                "INSERT INTO attraction_categories (attraction_id, category) VALUES (?1, ?2)",
                params![poi.id, category],
            )?;
        }
        for companion in &poi.companions {
            tx.execute(
                "INSERT INTO attraction_companions (attraction_id, companion_type) VALUES (?1, ?2)",
                params![poi.id, companion.as_str()],
            )?;
        }
    }
    tx.commit()
}
