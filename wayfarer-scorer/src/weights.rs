//! Weights applied to interest matches.
#![forbid(unsafe_code)]

use crate::MatchWeightsError;

/// Relative weighting of the two match terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    /// Added for every requested tag found among a point's categories,
    /// counting repeated tags each time.
    pub per_match: f64,
    /// Added once for every distinct requested tag found among a point's
    /// categories.
    pub per_distinct: f64,
}

impl MatchWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`MatchWeightsError`] when either value is not finite or is
    /// negative.
    pub fn validate(self) -> Result<Self, MatchWeightsError> {
        for (field, value) in [
            ("per_match", self.per_match),
            ("per_distinct", self.per_distinct),
        ] {
            if !value.is_finite() {
                return Err(MatchWeightsError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(MatchWeightsError::Negative { field, value });
            }
        }
        Ok(self)
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            per_match: 2.0,
            per_distinct: 1.0,
        }
    }
}
