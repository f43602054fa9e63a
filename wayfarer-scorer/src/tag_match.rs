//! Scorer comparing point categories with requested interests.
#![forbid(unsafe_code)]

use wayfarer_core::{Interests, PointOfInterest, Scorer};

use crate::{MatchWeights, MatchWeightsError};

/// How a point's categories overlap a list of interests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchCounts {
    /// Interest entries found among the categories, duplicates included.
    pub matched: usize,
    /// Distinct interest tags found among the categories.
    pub distinct: usize,
}

impl MatchCounts {
    /// Count the overlap between `poi`'s categories and `interests`.
    ///
    /// Matching is exact and case-sensitive. A point without categories
    /// matches nothing.
    #[must_use]
    pub fn between(poi: &PointOfInterest, interests: &Interests) -> Self {
        let matched = interests
            .iter()
            .filter(|tag| poi.categories.contains(*tag))
            .count();
        let distinct = interests
            .distinct()
            .into_iter()
            .filter(|tag| poi.categories.contains(*tag))
            .count();
        Self { matched, distinct }
    }
}

/// Scorer rewarding points whose categories match requested interests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TagMatchScorer {
    weights: MatchWeights,
}

impl TagMatchScorer {
    /// Construct a scorer with validated weights.
    ///
    /// # Errors
    /// Returns [`MatchWeightsError`] when a weight is negative or not finite.
    pub fn new(weights: MatchWeights) -> Result<Self, MatchWeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> MatchWeights {
        self.weights
    }
}

impl Scorer for TagMatchScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the score is a weighted sum of match counts"
    )]
    fn score(&self, poi: &PointOfInterest, interests: &Interests) -> f64 {
        let counts = MatchCounts::between(poi, interests);
        let raw = as_f64(counts.matched) * self.weights.per_match
            + as_f64(counts.distinct) * self.weights.per_distinct;
        Self::sanitise(raw)
    }
}

fn as_f64(count: usize) -> f64 {
    u32::try_from(count).map_or(f64::from(u32::MAX), f64::from)
}
