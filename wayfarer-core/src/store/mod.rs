//! Data access traits for points of interest.
//!
//! The `PoiStore` trait defines a read-only interface for retrieving the
//! candidate [`PointOfInterest`] values of a planning request: points in the
//! requested region that welcome the traveller's companion type and share at
//! least one category with their interests.

use crate::{Companion, Interests, PlanRequest, PointOfInterest};

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqlitePoiStore, SqlitePoiStoreError};

/// Largest candidate list a store returns for one request by default.
pub const CANDIDATE_LIMIT: usize = 100;

/// Filter describing the candidates of a planning request.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use wayfarer_core::{CandidateQuery, Companion, Interests, PointOfInterest};
///
/// let query = CandidateQuery::new("busan", Interests::new(["Beach"]), Companion::Solo);
/// let poi = PointOfInterest::new(1, "Haeundae", Coord { x: 129.16, y: 35.16 })
///     .with_region("busan")
///     .with_categories(["Beach"])
///     .with_companions([Companion::Solo]);
///
/// assert!(query.matches(&poi));
/// assert!(!query.matches(&poi.clone().with_region("seoul")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateQuery {
    /// Region every candidate must belong to.
    pub region: String,
    /// Interests of which every candidate must match at least one.
    pub interests: Interests,
    /// Companion type every candidate must support.
    pub companion: Companion,
    /// Maximum number of candidates to return.
    pub limit: usize,
}

impl CandidateQuery {
    /// Build a query with the default [`CANDIDATE_LIMIT`].
    pub fn new(region: impl Into<String>, interests: Interests, companion: Companion) -> Self {
        Self {
            region: region.into(),
            interests,
            companion,
            limit: CANDIDATE_LIMIT,
        }
    }

    /// Replace the candidate limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Report whether `poi` satisfies the region, companion and interest
    /// filters. The limit is not considered.
    #[must_use]
    pub fn matches(&self, poi: &PointOfInterest) -> bool {
        poi.region == self.region
            && poi.supports(self.companion)
            && self
                .interests
                .iter()
                .any(|tag| poi.categories.contains(tag))
    }
}

impl From<&PlanRequest> for CandidateQuery {
    fn from(request: &PlanRequest) -> Self {
        Self::new(
            request.region.clone(),
            request.interests.clone(),
            request.companion,
        )
    }
}

/// Read-only access to persisted points of interest.
///
/// Implementations return matching points in their own stable order (for
/// example popularity) truncated to `query.limit`. Stores must be
/// `Send + Sync` so a planner holding one can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use wayfarer_core::{CandidateQuery, Companion, Interests, PoiStore, PointOfInterest};
///
/// struct VecStore {
///     pois: Vec<PointOfInterest>,
/// }
///
/// impl PoiStore for VecStore {
///     fn candidates(&self, query: &CandidateQuery) -> Vec<PointOfInterest> {
///         self.pois
///             .iter()
///             .filter(|poi| query.matches(poi))
///             .take(query.limit)
///             .cloned()
///             .collect()
///     }
/// }
///
/// let poi = PointOfInterest::new(1, "Hanok Village", Coord { x: 127.15, y: 35.82 })
///     .with_region("jeonju")
///     .with_categories(["History"])
///     .with_companions([Companion::Family]);
/// let store = VecStore { pois: vec![poi.clone()] };
/// let query = CandidateQuery::new("jeonju", Interests::new(["History"]), Companion::Family);
///
/// assert_eq!(store.candidates(&query), vec![poi]);
/// ```
pub trait PoiStore: Send + Sync {
    /// Return the candidates matching `query`, at most `query.limit` of them.
    fn candidates(&self, query: &CandidateQuery) -> Vec<PointOfInterest>;
}

impl<S: PoiStore + ?Sized> PoiStore for &S {
    fn candidates(&self, query: &CandidateQuery) -> Vec<PointOfInterest> {
        (**self).candidates(query)
    }
}
