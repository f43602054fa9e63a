//! Test helpers for writing plan requests and attraction databases.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use geo::Coord;
use tempfile::TempDir;
use wayfarer_core::test_support::write_sqlite_database;
use wayfarer_core::{Companion, Interests, PlanRequest, PointOfInterest};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory with a UTF-8 root path.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// A two-day Jeonju food and history trip for a family.
pub(super) fn jeonju_request() -> PlanRequest {
    PlanRequest {
        region: "jeonju".to_owned(),
        start_date: NaiveDate::from_ymd_opt(2025, 12, 20).expect("valid date"),
        end_date: NaiveDate::from_ymd_opt(2025, 12, 21).expect("valid date"),
        companion: Companion::Family,
        interests: Interests::new(["Food", "History"]),
    }
}

pub(super) fn write_request(path: &Utf8Path, request: &PlanRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}

/// Six family-friendly Jeonju attractions in the hanok village area.
pub(super) fn jeonju_attractions() -> Vec<PointOfInterest> {
    let spots: [(u64, &str, f64, f64, &str); 6] = [
        (1, "Hanok Village", 127.153, 35.815, "History"),
        (2, "Nambu Market", 127.146, 35.818, "Food"),
        (3, "Gyeonggijeon", 127.150, 35.815, "History"),
        (4, "Jeondong Cathedral", 127.149, 35.813, "History"),
        (5, "Bibimbap Street", 127.145, 35.820, "Food"),
        (6, "Omokdae", 127.155, 35.812, "History"),
    ];
    spots
        .into_iter()
        .map(|(id, name, lon, lat, category)| {
            PointOfInterest::new(id, name, Coord { x: lon, y: lat })
                .with_region("jeonju")
                .with_categories([category])
                .with_companions([Companion::Family, Companion::Friends])
        })
        .collect()
}

pub(super) fn write_attractions(path: &Utf8Path) {
    write_sqlite_database(path.as_std_path(), &jeonju_attractions()).expect("write database");
}
