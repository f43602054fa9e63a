//! Score points of interest against a traveller's interests.
//!
//! The `Scorer` trait assigns a relevance score to a
//! [`PointOfInterest`](crate::PointOfInterest) given the requested
//! [`Interests`](crate::Interests).

use crate::{Interests, PointOfInterest};

/// Calculate a relevance score for a point of interest.
///
/// Higher scores indicate a better match between the point and the
/// caller's interests. Implementations must be thread-safe (`Send` + `Sync`)
/// so one scorer can serve concurrent planning requests. Scoring is a pure
/// function of its inputs and must not mutate the point.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return non-negative values.
///
/// Scores are not normalised; the planner only compares them.
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use wayfarer_core::{Interests, PointOfInterest, Scorer};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(&self, _poi: &PointOfInterest, _interests: &Interests) -> f64 {
///         1.0
///     }
/// }
///
/// let poi = PointOfInterest::new(1, "Museum", Coord { x: 0.0, y: 0.0 });
/// let interests = Interests::new(["History"]);
/// assert_eq!(UnitScorer.score(&poi, &interests), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `poi` according to `interests`.
    fn score(&self, poi: &PointOfInterest, interests: &Interests) -> f64;

    /// Validate a raw score.
    ///
    /// Returns positive `0.0` for non-finite, negative or zero values, so
    /// sanitised scores order the same under `f64::total_cmp` as under `<`.
    #[must_use]
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if score.is_finite() && score > 0.0 {
            score
        } else {
            0.0
        }
    }
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, poi: &PointOfInterest, interests: &Interests) -> f64 {
        (**self).score(poi, interests)
    }
}
