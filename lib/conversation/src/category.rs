//! Fact categories.
//!
//! The set of categories is closed. `History` and `Headquarters` are the
//! primary pair the conversation steers between; `Cats` is a side category
//! offered as a change of topic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a category name is not one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategoryError {
    /// The name that failed to parse.
    pub name: String,
}

impl fmt::Display for UnknownCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fact category: '{}'", self.name)
    }
}

impl std::error::Error for UnknownCategoryError {}

/// A fact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Company history.
    History,
    /// Company headquarters.
    Headquarters,
    /// Cat facts.
    Cats,
}

impl Category {
    /// Every category, in session-key order.
    pub const ALL: [Category; 3] = [Self::History, Self::Headquarters, Self::Cats];

    /// Returns the wire name, which is also the session key of the pool.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Headquarters => "headquarters",
            Self::Cats => "cats",
        }
    }

    /// Returns the primary category, or `None` for `Cats`.
    #[must_use]
    pub const fn primary(&self) -> Option<PrimaryCategory> {
        match self {
            Self::History => Some(PrimaryCategory::History),
            Self::Headquarters => Some(PrimaryCategory::Headquarters),
            Self::Cats => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategoryError {
                name: s.to_string(),
            })
    }
}

/// One of the two primary categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryCategory {
    /// Company history.
    History,
    /// Company headquarters.
    Headquarters,
}

impl PrimaryCategory {
    /// Returns the other primary category.
    #[must_use]
    pub const fn sibling(&self) -> PrimaryCategory {
        match self {
            Self::History => Self::Headquarters,
            Self::Headquarters => Self::History,
        }
    }

    /// Returns this category as a general `Category`.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::History => Category::History,
            Self::Headquarters => Category::Headquarters,
        }
    }
}

impl From<PrimaryCategory> for Category {
    fn from(primary: PrimaryCategory) -> Self {
        primary.category()
    }
}

impl fmt::Display for PrimaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.category().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_is_an_involution() {
        for primary in [PrimaryCategory::History, PrimaryCategory::Headquarters] {
            assert_ne!(primary.sibling(), primary);
            assert_eq!(primary.sibling().sibling(), primary);
        }
    }

    #[test]
    fn only_cats_has_no_primary() {
        assert_eq!(Category::History.primary(), Some(PrimaryCategory::History));
        assert_eq!(
            Category::Headquarters.primary(),
            Some(PrimaryCategory::Headquarters)
        );
        assert_eq!(Category::Cats.primary(), None);
    }

    #[test]
    fn parse_known_names() {
        assert_eq!("history".parse::<Category>(), Ok(Category::History));
        assert_eq!("Headquarters".parse::<Category>(), Ok(Category::Headquarters));
        assert_eq!(" cats ".parse::<Category>(), Ok(Category::Cats));
    }

    #[test]
    fn parse_unknown_name() {
        let err = "weather".parse::<Category>().unwrap_err();
        assert_eq!(err.name, "weather");
        assert!(err.to_string().contains("unknown fact category"));
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&PrimaryCategory::Headquarters).expect("serialize");
        assert_eq!(json, "\"headquarters\"");
        let parsed: Category = serde_json::from_str("\"cats\"").expect("deserialize");
        assert_eq!(parsed, Category::Cats);
    }
}
