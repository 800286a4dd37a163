//! Categories and the quiz category filter

use serde::{Deserialize, Serialize};

/// A labelled grouping that questions belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Which questions a quiz round draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No filter; every category is eligible
    #[default]
    Any,
    /// Only questions in the given category
    Only(i64),
}

impl CategoryFilter {
    /// Build a filter from a requested category id.
    ///
    /// A missing id, or one equal to `all_category_id`, means "every category".
    pub fn from_requested(id: Option<i64>, all_category_id: i64) -> Self {
        match id {
            Some(id) if id != all_category_id => Self::Only(id),
            _ => Self::Any,
        }
    }

    /// Whether a question in `category` passes this filter.
    pub fn matches(&self, category: i64) -> bool {
        match self {
            Self::Any => true,
            Self::Only(id) => *id == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_means_any() {
        assert_eq!(CategoryFilter::from_requested(None, 0), CategoryFilter::Any);
        assert_eq!(CategoryFilter::from_requested(Some(0), 0), CategoryFilter::Any);
        assert_eq!(
            CategoryFilter::from_requested(Some(3), 0),
            CategoryFilter::Only(3)
        );
    }

    #[test]
    fn sentinel_is_configurable() {
        // With a non-zero sentinel, 0 is an ordinary (unknown) category id
        assert_eq!(
            CategoryFilter::from_requested(Some(0), -1),
            CategoryFilter::Only(0)
        );
        assert_eq!(CategoryFilter::from_requested(Some(-1), -1), CategoryFilter::Any);
    }

    #[test]
    fn matches() {
        assert!(CategoryFilter::Any.matches(42));
        assert!(CategoryFilter::Only(2).matches(2));
        assert!(!CategoryFilter::Only(2).matches(3));
    }

    #[test]
    fn serializes_type_label() {
        let json = serde_json::to_value(Category::new(1, "Science")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "type": "Science"}));
    }
}
