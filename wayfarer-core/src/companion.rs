//! Who the traveller is visiting with.
//!
//! The enum gives compile-time safety for companion filtering; stores parse
//! their free-form companion columns through [`FromStr`].
//!
//! # Examples
//! ```
//! use wayfarer_core::Companion;
//!
//! assert_eq!(Companion::Family.as_str(), "family");
//! assert_eq!("Solo".parse::<Companion>(), Ok(Companion::Solo));
//! ```

use std::str::FromStr;

use thiserror::Error;

/// Companion type of a traveller or supported by a point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Companion {
    /// Travelling with friends.
    Friends,
    /// Travelling with family, possibly children.
    Family,
    /// Travelling alone.
    Solo,
}

/// Error returned when a string does not name a [`Companion`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown companion type '{0}'")]
pub struct ParseCompanionError(pub String);

impl Companion {
    /// Every companion type, in declaration order.
    pub const ALL: [Self; 3] = [Self::Friends, Self::Family, Self::Solo];

    /// Return the companion as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Friends => "friends",
            Self::Family => "family",
            Self::Solo => "solo",
        }
    }
}

impl std::fmt::Display for Companion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Companion {
    type Err = ParseCompanionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "friends" => Ok(Self::Friends),
            "family" => Ok(Self::Family),
            "solo" => Ok(Self::Solo),
            _ => Err(ParseCompanionError(s.to_owned())),
        }
    }
}
