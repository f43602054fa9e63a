//! Straight-line travel between points of interest.
//!
//! Distances are great-circle (haversine) kilometres on a sphere of radius
//! [`EARTH_RADIUS_KM`]. Travel time assumes a constant average speed; road
//! networks and traffic are not modelled.

use geo::Coord;

/// Sphere radius used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average door-to-door speed assumed between stops.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 30.0;

/// Great-circle distance in kilometres between two latitude/longitude pairs
/// given in degrees.
///
/// # Examples
/// ```
/// use wayfarer_core::haversine_km;
///
/// let seoul_to_busan = haversine_km(37.5665, 126.9780, 35.1796, 129.0756);
/// assert!((seoul_to_busan - 325.0).abs() < 5.0);
/// assert_eq!(haversine_km(35.0, 129.0, 35.0, 129.0), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine is a floating-point formula"
)]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// [`haversine_km`] over `geo` coordinates (`x = longitude`, `y = latitude`).
#[must_use]
pub fn distance_between(from: &Coord<f64>, to: &Coord<f64>) -> f64 {
    haversine_km(from.y, from.x, to.y, to.x)
}

/// Converts straight-line distance into travel time.
///
/// # Examples
/// ```
/// use wayfarer_core::TravelModel;
///
/// let model = TravelModel::default();
/// assert_eq!(model.hours_for(15.0), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelModel {
    /// Average speed in kilometres per hour.
    pub average_speed_kmh: f64,
}

impl TravelModel {
    /// Construct a model travelling at `average_speed_kmh`.
    #[must_use]
    pub const fn new(average_speed_kmh: f64) -> Self {
        Self { average_speed_kmh }
    }

    /// Hours needed to cover `distance_km`.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "travel time is distance over speed")]
    pub fn hours_for(&self, distance_km: f64) -> f64 {
        distance_km / self.average_speed_kmh
    }
}

impl Default for TravelModel {
    fn default() -> Self {
        Self::new(DEFAULT_AVERAGE_SPEED_KMH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(37.5665, 126.978)]
    #[case(-33.8688, 151.2093)]
    #[case(89.9, -179.9)]
    fn distance_to_self_is_zero(#[case] lat: f64, #[case] lon: f64) {
        assert!(haversine_km(lat, lon, lat, lon).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case((37.5665, 126.978), (35.1796, 129.0756))]
    #[case((33.4996, 126.5312), (37.7519, 128.8761))]
    #[case((-1.0, 179.5), (1.0, -179.5))]
    fn distance_is_symmetric(#[case] a: (f64, f64), #[case] b: (f64, f64)) {
        let there = haversine_km(a.0, a.1, b.0, b.1);
        let back = haversine_km(b.0, b.1, a.0, a.1);
        assert!((there - back).abs() < 1e-9);
    }

    #[rstest]
    fn one_degree_of_latitude_matches_the_sphere() {
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((haversine_km(0.0, 0.0, 1.0, 0.0) - expected).abs() < 1e-9);
    }

    #[rstest]
    fn antipodes_are_half_a_circumference_apart() {
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((haversine_km(0.0, 0.0, 0.0, 180.0) - expected).abs() < 1e-6);
    }

    #[rstest]
    fn coordinates_use_longitude_as_x() {
        let jeonju = Coord { x: 127.148, y: 35.8242 };
        let gangneung = Coord { x: 128.8761, y: 37.7519 };
        let direct = haversine_km(35.8242, 127.148, 37.7519, 128.8761);
        assert!((distance_between(&jeonju, &gangneung) - direct).abs() < f64::EPSILON);
    }

    #[rstest]
    fn travel_time_scales_with_speed() {
        assert!((TravelModel::new(60.0).hours_for(30.0) - 0.5).abs() < f64::EPSILON);
        assert!((TravelModel::default().hours_for(0.0)).abs() < f64::EPSILON);
    }
}
