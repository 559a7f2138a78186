//! Product category tags.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a category tag is not one of the known set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryError(pub String);

/// The fixed set of shop categories.
///
/// Serialized as the bare tag (`"Clothing"`, `"Care"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Clothing,
    Care,
    Safety,
    Feeding,
    Sleep,
    Toys,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Clothing,
        Self::Care,
        Self::Feeding,
        Self::Safety,
        Self::Sleep,
        Self::Toys,
    ];

    /// The tag used in catalog documents and filter queries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clothing => "Clothing",
            Self::Care => "Care",
            Self::Safety => "Safety",
            Self::Feeding => "Feeding",
            Self::Sleep => "Sleep",
            Self::Toys => "Toys",
        }
    }

    /// Human-readable menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clothing => "Baby Clothing",
            Self::Care => "Baby Care",
            Self::Safety => "Safety & Monitoring",
            Self::Feeding => "Feeding",
            Self::Sleep => "Sleep & Comfort",
            Self::Toys => "Toys & Learning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_exact() {
        assert_eq!("Clothing".parse::<Category>().unwrap(), Category::Clothing);
        assert_eq!("Toys".parse::<Category>().unwrap(), Category::Toys);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("feeding".parse::<Category>().unwrap(), Category::Feeding);
        assert_eq!(" SLEEP ".parse::<Category>().unwrap(), Category::Sleep);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "Strollers".parse::<Category>().unwrap_err();
        assert_eq!(err, CategoryError("Strollers".to_string()));
        assert_eq!(err.to_string(), "unknown category: Strollers");
    }

    #[test]
    fn test_display_matches_serde_tag() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Safety.label(), "Safety & Monitoring");
        assert_eq!(Category::Care.label(), "Baby Care");
    }
}
