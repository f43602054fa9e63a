//! Interest tags requested by a traveller.
//!
//! Tags are kept in request order and duplicates are preserved: the match
//! score counts every listed tag, so a repeated interest weighs more than a
//! single one, while the distinct-category term does not change.

use std::collections::BTreeSet;

/// Ordered list of interest tags.
///
/// # Examples
/// ```
/// use wayfarer_core::Interests;
///
/// let interests = Interests::new(["Food", "Cafe", "Food"]);
/// assert_eq!(interests.len(), 3);
/// assert_eq!(interests.distinct().len(), 2);
/// assert!(interests.contains("Cafe"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Interests {
    tags: Vec<String>,
}

impl Interests {
    /// Build an interest list from any collection of tags.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a tag while returning `self` for chaining.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::Interests;
    ///
    /// let interests = Interests::default().with_tag("History");
    /// assert!(interests.contains("History"));
    /// ```
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Report whether `tag` was requested at least once.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Iterate over the tags in request order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// The set of distinct tags.
    #[must_use]
    pub fn distinct(&self) -> BTreeSet<&str> {
        self.iter().collect()
    }

    /// Number of tags, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Report whether no tags were requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Interests {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn keeps_request_order_and_duplicates() {
        let interests = Interests::new(["K-pop", "Food", "K-pop"]);
        let tags: Vec<_> = interests.iter().collect();
        assert_eq!(tags, vec!["K-pop", "Food", "K-pop"]);
    }

    #[rstest]
    fn distinct_collapses_duplicates() {
        let interests: Interests = ["Food", "Food", "Shopping"].into_iter().collect();
        assert_eq!(interests.distinct(), BTreeSet::from(["Food", "Shopping"]));
    }

    #[rstest]
    fn empty_list_reports_empty() {
        let interests = Interests::default();
        assert!(interests.is_empty());
        assert!(!interests.contains("Food"));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_as_plain_array() {
        let interests = Interests::new(["Cafe", "History"]);
        let json = serde_json::to_string(&interests).unwrap();
        assert_eq!(json, r#"["Cafe","History"]"#);
    }
}
