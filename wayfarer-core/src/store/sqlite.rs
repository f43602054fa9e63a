//! SQLite-backed store implementation for attraction records.
//!
//! The database holds one row per attraction plus two link tables for its
//! categories and supported companion types. Every row is read once when the
//! store is opened and queries are answered from memory in popularity order.

use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
};

use geo::Coord;
use log::warn;
use rusqlite::{Connection, OpenFlags, Row};
use thiserror::Error;

use crate::poi::{DEFAULT_CLOSING_HOUR, DEFAULT_OPENING_HOUR, DEFAULT_VISIT_HOURS};
use crate::{Companion, PointOfInterest};

use super::{CandidateQuery, PoiStore};

const ATTRACTIONS_QUERY: &str = "SELECT id, name, region, latitude, longitude, \
     avg_duration, opening_time, closing_time \
     FROM attractions ORDER BY popularity_score DESC, id ASC";
const CATEGORIES_QUERY: &str =
    "SELECT attraction_id, category FROM attraction_categories ORDER BY attraction_id";
const COMPANIONS_QUERY: &str =
    "SELECT attraction_id, companion_type FROM attraction_companions ORDER BY attraction_id";

/// Error raised when opening or reading an attraction database.
#[derive(Debug, Error)]
pub enum SqlitePoiStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Generic SQLite error when reading attraction rows.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// Read-only store backed by an SQLite attraction database.
pub struct SqlitePoiStore {
    pois: Vec<PointOfInterest>,
}

impl fmt::Debug for SqlitePoiStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlitePoiStore")
            .field("entries", &self.pois.len())
            .finish_non_exhaustive()
    }
}

impl SqlitePoiStore {
    /// Open the database at `path` read-only and load every attraction.
    ///
    /// Rows whose hours do not fit the 24-hour clock or that fail
    /// [`PointOfInterest::validate`] are skipped, as are companion labels
    /// that do not name a [`Companion`]. Each skip is logged as a warning.
    ///
    /// # Errors
    /// Returns [`SqlitePoiStoreError::OpenDatabase`] when the file cannot be
    /// opened and [`SqlitePoiStoreError::Database`] when the expected tables
    /// cannot be read.
    pub fn open<P>(path: P) -> Result<Self, SqlitePoiStoreError>
    where
        P: AsRef<Path>,
    {
        let database_path = path.as_ref();
        let connection =
            Connection::open_with_flags(database_path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(
                |source| SqlitePoiStoreError::OpenDatabase {
                    path: database_path.to_path_buf(),
                    source,
                },
            )?;
        Ok(Self {
            pois: load_pois(&connection)?,
        })
    }

    /// Number of attractions loaded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    /// Report whether the database held no usable attraction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }
}

impl PoiStore for SqlitePoiStore {
    fn candidates(&self, query: &CandidateQuery) -> Vec<PointOfInterest> {
        self.pois
            .iter()
            .filter(|poi| query.matches(poi))
            .take(query.limit)
            .cloned()
            .collect()
    }
}

struct AttractionRow {
    id: i64,
    name: String,
    region: String,
    latitude: f64,
    longitude: f64,
    avg_duration: Option<f64>,
    opening_time: Option<i64>,
    closing_time: Option<i64>,
}

impl AttractionRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            region: row.get(2)?,
            latitude: row.get(3)?,
            longitude: row.get(4)?,
            avg_duration: row.get(5)?,
            opening_time: row.get(6)?,
            closing_time: row.get(7)?,
        })
    }
}

fn load_pois(connection: &Connection) -> Result<Vec<PointOfInterest>, SqlitePoiStoreError> {
    let mut categories = load_labels(connection, CATEGORIES_QUERY)?;
    let mut companions = load_labels(connection, COMPANIONS_QUERY)?;

    let mut statement = connection.prepare(ATTRACTIONS_QUERY)?;
    let rows = statement.query_map([], AttractionRow::from_row)?;
    let mut pois = Vec::new();
    for row in rows {
        let record = row?;
        let labels = (
            categories.remove(&record.id).unwrap_or_default(),
            companions.remove(&record.id).unwrap_or_default(),
        );
        if let Some(poi) = build_poi(record, labels) {
            pois.push(poi);
        }
    }
    Ok(pois)
}

fn load_labels(
    connection: &Connection,
    query: &str,
) -> Result<HashMap<i64, Vec<String>>, SqlitePoiStoreError> {
    let mut statement = connection.prepare(query)?;
    let rows = statement.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get(1)?)))?;
    let mut labels: HashMap<i64, Vec<String>> = HashMap::new();
    for row in rows {
        let (id, label) = row?;
        labels.entry(id).or_default().push(label);
    }
    Ok(labels)
}

fn build_poi(
    record: AttractionRow,
    (categories, companion_labels): (Vec<String>, Vec<String>),
) -> Option<PointOfInterest> {
    let Ok(id) = u64::try_from(record.id) else {
        warn!("skipping attraction with negative id {}", record.id);
        return None;
    };
    let (Some(opening), Some(closing)) = (
        clock_hour(record.opening_time, DEFAULT_OPENING_HOUR),
        clock_hour(record.closing_time, DEFAULT_CLOSING_HOUR),
    ) else {
        warn!("skipping attraction {id}: opening or closing time is not a clock hour");
        return None;
    };
    let companions = companion_labels
        .iter()
        .filter_map(|label| match label.parse::<Companion>() {
            Ok(companion) => Some(companion),
            Err(err) => {
                warn!("attraction {id}: {err}");
                None
            }
        })
        .collect::<Vec<_>>();

    let poi = PointOfInterest::new(
        id,
        record.name,
        Coord {
            x: record.longitude,
            y: record.latitude,
        },
    )
    .with_region(record.region)
    .with_categories(categories)
    .with_companions(companions)
    .with_duration(record.avg_duration.unwrap_or(DEFAULT_VISIT_HOURS))
    .with_hours(opening, closing);

    match poi.validate() {
        Ok(()) => Some(poi),
        Err(err) => {
            warn!("skipping attraction: {err}");
            None
        }
    }
}

fn clock_hour(value: Option<i64>, default: u8) -> Option<u8> {
    value.map_or(Some(default), |hour| u8::try_from(hour).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Interests;
    use crate::test_support::{create_sqlite_schema, write_sqlite_database};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    fn poi(id: u64, region: &str, category: &str) -> PointOfInterest {
        PointOfInterest::new(id, format!("attraction {id}"), Coord { x: 126.9, y: 37.5 })
            .with_region(region)
            .with_categories([category])
            .with_companions([Companion::Friends, Companion::Solo])
            .with_duration(1.5)
            .with_hours(10, 20)
    }

    #[fixture]
    fn temp_db() -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("attractions.db");
        (dir, path)
    }

    fn query(interests: &[&str]) -> CandidateQuery {
        CandidateQuery::new(
            "seoul",
            Interests::new(interests.iter().copied()),
            Companion::Friends,
        )
    }

    #[rstest]
    fn loads_records_in_popularity_order(temp_db: (TempDir, PathBuf)) {
        let (_dir, path) = temp_db;
        let pois = vec![poi(3, "seoul", "Food"), poi(1, "seoul", "Cafe"), poi(2, "busan", "Food")];
        write_sqlite_database(&path, &pois).expect("persist database");

        let store = SqlitePoiStore::open(&path).expect("open store");
        assert_eq!(store.len(), 3);
        let found = store.candidates(&query(&["Food", "Cafe"]));
        assert_eq!(found, vec![pois[0].clone(), pois[1].clone()]);
    }

    #[rstest]
    fn respects_the_candidate_limit(temp_db: (TempDir, PathBuf)) {
        let (_dir, path) = temp_db;
        let pois: Vec<_> = (1..=5).map(|id| poi(id, "seoul", "Food")).collect();
        write_sqlite_database(&path, &pois).expect("persist database");

        let store = SqlitePoiStore::open(&path).expect("open store");
        let found = store.candidates(&query(&["Food"]).with_limit(2));
        assert_eq!(found.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[rstest]
    fn missing_database_fails_to_open(temp_db: (TempDir, PathBuf)) {
        let (_dir, path) = temp_db;
        let err = SqlitePoiStore::open(&path).expect_err("file does not exist");
        assert!(matches!(err, SqlitePoiStoreError::OpenDatabase { .. }));
    }

    #[rstest]
    fn missing_tables_surface_database_errors(temp_db: (TempDir, PathBuf)) {
        let (_dir, path) = temp_db;
        Connection::open(&path)
            .and_then(|conn| conn.execute_batch("CREATE TABLE unrelated (id INTEGER);"))
            .expect("create database");
        let err = SqlitePoiStore::open(&path).expect_err("schema is missing");
        assert!(matches!(err, SqlitePoiStoreError::Database(_)));
    }

    #[rstest]
    fn null_columns_fall_back_to_record_defaults(temp_db: (TempDir, PathBuf)) {
        let (_dir, path) = temp_db;
        let conn = Connection::open(&path).expect("create database");
        create_sqlite_schema(&conn).expect("create schema");
        conn.execute_batch(
            "INSERT INTO attractions (id, name, region, latitude, longitude, popularity_score)
                 VALUES (4, 'Bukchon', 'seoul', 37.58, 126.98, 1.0);
             INSERT INTO attraction_categories VALUES (4, 'History');
             INSERT INTO attraction_companions VALUES (4, 'friends');",
        )
        .expect("insert rows");
        drop(conn);

        let store = SqlitePoiStore::open(&path).expect("open store");
        let found = store.candidates(&query(&["History"]));
        let [bukchon] = found.as_slice() else {
            panic!("expected one candidate, got {found:?}");
        };
        assert_eq!(bukchon.opening_hour, DEFAULT_OPENING_HOUR);
        assert_eq!(bukchon.closing_hour, DEFAULT_CLOSING_HOUR);
        assert!((bukchon.avg_duration_hours - DEFAULT_VISIT_HOURS).abs() < f64::EPSILON);
    }

    #[rstest]
    fn skips_invalid_rows_and_unknown_companions(temp_db: (TempDir, PathBuf)) {
        let (_dir, path) = temp_db;
        let conn = Connection::open(&path).expect("create database");
        create_sqlite_schema(&conn).expect("create schema");
        conn.execute_batch(
            "INSERT INTO attractions VALUES (1, 'Late', 'seoul', 37.5, 127.0, 1.0, 30, 8, 3.0);
             INSERT INTO attractions VALUES (2, 'Inverted', 'seoul', 37.5, 127.0, 1.0, 20, 8, 2.0);
             INSERT INTO attractions VALUES (3, 'Fine', 'seoul', 37.5, 127.0, 1.0, 9, 18, 1.0);
             INSERT INTO attraction_categories VALUES (1, 'Food'), (2, 'Food'), (3, 'Food');
             INSERT INTO attraction_companions VALUES
                 (1, 'friends'), (2, 'friends'), (3, 'friends'), (3, 'pets');",
        )
        .expect("insert rows");
        drop(conn);

        let store = SqlitePoiStore::open(&path).expect("open store");
        assert_eq!(store.len(), 1);
        let found = store.candidates(&query(&["Food"]));
        assert_eq!(found.len(), 1);
        assert_eq!(
            found.first().map(|p| p.companions.iter().copied().collect::<Vec<_>>()),
            Some(vec![Companion::Friends])
        );
    }

    #[rstest]
    fn debug_reports_entry_count(temp_db: (TempDir, PathBuf)) {
        let (_dir, path) = temp_db;
        write_sqlite_database(&path, &[poi(1, "seoul", "Food")]).expect("persist database");
        let store = SqlitePoiStore::open(&path).expect("open store");
        assert!(format!("{store:?}").contains("entries: 1"));
    }
}
