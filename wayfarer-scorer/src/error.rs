//! Error types raised while configuring the tag-match scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when [`MatchWeights`](crate::MatchWeights) are unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchWeightsError {
    /// A weight was NaN or infinite.
    #[error("weight {field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending weight.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A weight was below zero.
    #[error("weight {field} must not be negative, got {value}")]
    Negative {
        /// Name of the offending weight.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}
