//! Top-level view categories.

use crate::domain::error::RestloopError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which listing the public page shows and which admin tab is open.
///
/// Only rest points carry data; `Movies` is a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    RestPoints,
    Movies,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Self; 2] = [Self::RestPoints, Self::Movies];

    /// Wire name, as used in configuration and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RestPoints => "rest-points",
            Self::Movies => "movies",
        }
    }

    /// Tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RestPoints => "Rest Points",
            Self::Movies => "Movies",
        }
    }

    /// The next category in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::RestPoints => Self::Movies,
            Self::Movies => Self::RestPoints,
        }
    }

    /// Position of this category in [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::RestPoints => 0,
            Self::Movies => 1,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RestloopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rest-points" => Ok(Self::RestPoints),
            "movies" => Ok(Self::Movies),
            other => Err(RestloopError::Validation(format!(
                "unknown category: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_legal_values() {
        assert_eq!("rest-points".parse::<Category>().unwrap(), Category::RestPoints);
        assert_eq!("movies".parse::<Category>().unwrap(), Category::Movies);
    }

    #[test]
    fn rejects_unknown_values() {
        let err = "music".parse::<Category>().unwrap_err();
        assert!(matches!(err, RestloopError::Validation(_)));
    }

    #[test]
    fn next_cycles_through_all() {
        assert_eq!(Category::RestPoints.next(), Category::Movies);
        assert_eq!(Category::Movies.next(), Category::RestPoints);
        for category in Category::ALL {
            assert_eq!(Category::ALL[category.index()], category);
        }
    }

    #[test]
    fn serializes_as_kebab_case() {
        let json = serde_json::to_string(&Category::RestPoints).unwrap();
        assert_eq!(json, "\"rest-points\"");
    }
}
