//! Interest-match scoring for Wayfarer points of interest.
//!
//! [`TagMatchScorer`] implements the [`Scorer`](wayfarer_core::Scorer) trait
//! by comparing a point's categories with the traveller's interest tags. Two
//! terms contribute:
//!
//! - every interest tag (duplicates included) found among the categories
//!   adds [`MatchWeights::per_match`];
//! - every distinct tag found adds [`MatchWeights::per_distinct`].
//!
//! With the default weights a point matching `n` distinct interests, each
//! requested once, scores `3n`. Repeating an interest raises only the first
//! term.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use wayfarer_core::{Interests, PointOfInterest, Scorer};
//! use wayfarer_scorer::TagMatchScorer;
//!
//! let poi = PointOfInterest::new(1, "Gwangjang Market", Coord { x: 127.0, y: 37.57 })
//!     .with_categories(["Food", "Shopping"]);
//! let scorer = TagMatchScorer::default();
//!
//! assert_eq!(scorer.score(&poi, &Interests::new(["Food"])), 3.0);
//! assert_eq!(scorer.score(&poi, &Interests::new(["Food", "Food"])), 5.0);
//! ```

#![forbid(unsafe_code)]

mod error;
mod tag_match;
mod weights;

pub use error::MatchWeightsError;
pub use tag_match::{MatchCounts, TagMatchScorer};
pub use weights::MatchWeights;
